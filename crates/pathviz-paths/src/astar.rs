use pathviz_core::{Grid, Pos};

use crate::distance::step_cost;
use crate::heuristic::Heuristic;
use crate::neighbors::Neighbors;
use crate::queue::PriorityQueue;
use crate::traversal::Traversal;

impl Traversal {
    /// A* from `start` until `target` is finalized.
    ///
    /// The frontier is ranked by `f = g + h`, where `g` is the distance
    /// stored in the traversal and `h` comes from `heuristic`. The path is
    /// optimal as long as the heuristic never overestimates; see
    /// [`Heuristic`] for when that holds.
    pub(crate) fn astar(
        &mut self,
        grid: &Grid,
        start: Pos,
        target: Pos,
        allow_diagonal: bool,
        heuristic: &Heuristic,
    ) -> Vec<Pos> {
        let mut visited = Vec::new();
        let mut open = PriorityQueue::new();
        let mut nb = Neighbors::new();

        self.set_distance(start, 0.0);
        open.enqueue(start, heuristic.estimate(start));

        while let Some(cur) = open.dequeue() {
            if self.is_visited(cur) || !grid.is_passable(cur) {
                continue;
            }

            self.mark_visited(cur);
            visited.push(cur);
            if cur == target {
                break;
            }

            let g = self.distance(cur);
            for step in nb.expand(grid, cur, allow_diagonal, |p| !self.is_visited(p)) {
                let tentative = g + step_cost(grid, step.pos, step.is_diagonal());
                if tentative >= self.distance(step.pos) {
                    continue;
                }
                self.set_distance(step.pos, tentative);
                self.set_previous(step.pos, cur);
                let f = tentative + heuristic.estimate(step.pos);
                if !open.set_priority(&step.pos, f) {
                    open.enqueue(step.pos, f);
                }
                log::trace!("astar: {} g={tentative:.3} f={f:.3}", step.pos);
            }
        }

        visited
    }
}
