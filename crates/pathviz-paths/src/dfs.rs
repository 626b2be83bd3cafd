use pathviz_core::{Grid, Pos};

use crate::neighbors::Neighbors;
use crate::traversal::Traversal;

impl Traversal {
    /// Depth-first search from `start` until `target` is finalized.
    ///
    /// Neighbors are pushed in reverse expansion order so the first
    /// direction (north) is explored first. A node's predecessor is the
    /// node that pushed the copy that gets popped. The path is valid but
    /// neither shortest nor cheapest.
    pub(crate) fn dfs(
        &mut self,
        grid: &Grid,
        start: Pos,
        target: Pos,
        allow_diagonal: bool,
    ) -> Vec<Pos> {
        let mut visited = Vec::new();
        let mut stack: Vec<(Pos, Option<Pos>)> = vec![(start, None)];
        let mut nb = Neighbors::new();

        self.set_distance(start, 0.0);

        while let Some((cur, parent)) = stack.pop() {
            if !self.mark_visited(cur) {
                continue;
            }
            if let Some(parent) = parent {
                let hops = self.distance(parent) + 1.0;
                self.set_distance(cur, hops);
                self.set_previous(cur, parent);
            }
            visited.push(cur);
            if cur == target {
                break;
            }

            let steps = nb.expand(grid, cur, allow_diagonal, |p| !self.is_visited(p));
            stack.extend(steps.iter().rev().map(|s| (s.pos, Some(cur))));
        }

        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explores_north_first_and_spirals() {
        let g = Grid::parse(
            "
T..
.S.
...",
        )
        .unwrap();
        let mut t = Traversal::new(g.bounds());
        let v = t.dfs(&g, g.start(), g.target(), false);
        let expected = vec![
            Pos::new(1, 1),
            Pos::new(0, 1),
            Pos::new(0, 2),
            Pos::new(1, 2),
            Pos::new(2, 2),
            Pos::new(2, 1),
            Pos::new(2, 0),
            Pos::new(1, 0),
            Pos::new(0, 0),
        ];
        assert_eq!(v, expected);
        // Every visit extended the branch, so the path is the whole walk.
        assert_eq!(t.path_to(g.target()), expected);
        assert_eq!(t.distance(g.target()), 8.0);
    }

    #[test]
    fn unreachable_target_exhausts_the_stack() {
        let g = Grid::parse("S.#T").unwrap();
        let mut t = Traversal::new(g.bounds());
        let v = t.dfs(&g, g.start(), g.target(), true);
        assert_eq!(v, vec![Pos::new(0, 0), Pos::new(0, 1)]);
        assert!(!t.is_visited(g.target()));
    }
}
