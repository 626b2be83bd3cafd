use std::collections::VecDeque;

use pathviz_core::{Grid, Pos};

use crate::neighbors::Neighbors;
use crate::traversal::Traversal;

impl Traversal {
    /// Breadth-first search from `start` until `target` is finalized.
    ///
    /// Ignores node costs: the stored distance is the hop count and the
    /// path has the fewest steps, not the lowest cost. Each node is queued
    /// once, with its predecessor fixed on first discovery.
    pub(crate) fn bfs(
        &mut self,
        grid: &Grid,
        start: Pos,
        target: Pos,
        allow_diagonal: bool,
    ) -> Vec<Pos> {
        let mut visited = Vec::new();
        let mut queue: VecDeque<Pos> = VecDeque::new();
        let mut nb = Neighbors::new();

        self.set_distance(start, 0.0);
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            self.mark_visited(cur);
            visited.push(cur);
            if cur == target {
                break;
            }

            let hops = self.distance(cur) + 1.0;
            for step in nb.expand(grid, cur, allow_diagonal, |p| !self.is_reached(p)) {
                self.set_distance(step.pos, hops);
                self.set_previous(step.pos, cur);
                queue.push_back(step.pos);
            }
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_layer_by_layer() {
        let g = Grid::parse(
            "
...
.S.
..T",
        )
        .unwrap();
        let mut t = Traversal::new(g.bounds());
        let v = t.bfs(&g, g.start(), g.target(), false);
        assert_eq!(
            v[..5],
            [
                Pos::new(1, 1),
                Pos::new(0, 1),
                Pos::new(1, 2),
                Pos::new(2, 1),
                Pos::new(1, 0),
            ]
        );
        assert_eq!(v.last(), Some(&g.target()));
        assert_eq!(t.distance(g.target()), 2.0);
        assert!(v.iter().all(|&p| t.distance(p) <= 2.0));
    }

    #[test]
    fn takes_fewest_steps_even_through_weights() {
        let g = Grid::parse(
            "
...
S9T
...",
        )
        .unwrap();
        let mut t = Traversal::new(g.bounds());
        t.bfs(&g, g.start(), g.target(), false);
        assert_eq!(
            t.path_to(g.target()),
            vec![Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2)]
        );
        assert_eq!(t.path_cost_to(&g, g.target()), 10.0);
    }

    #[test]
    fn unreachable_target_is_never_visited() {
        let g = Grid::parse(
            "
S..
.##
.#T",
        )
        .unwrap();
        let mut t = Traversal::new(g.bounds());
        let v = t.bfs(&g, g.start(), g.target(), false);
        assert_eq!(v.len(), 5);
        assert!(!v.contains(&g.target()));
        assert_eq!(t.path_to(g.target()), vec![g.target()]);
    }
}
