use pathviz_core::{Grid, Pos};

use crate::distance::step_cost;
use crate::neighbors::Neighbors;
use crate::queue::PriorityQueue;
use crate::traversal::Traversal;

impl Traversal {
    /// Dijkstra's algorithm from `start` until `target` is finalized.
    ///
    /// Candidates are served by ascending distance, ties in the order they
    /// were queued. Returns the finalized nodes in order.
    pub(crate) fn dijkstra(
        &mut self,
        grid: &Grid,
        start: Pos,
        target: Pos,
        allow_diagonal: bool,
    ) -> Vec<Pos> {
        let mut visited = Vec::new();
        let mut open = PriorityQueue::new();
        let mut nb = Neighbors::new();

        self.set_distance(start, 0.0);
        open.enqueue(start, 0.0);

        while let Some(cur) = open.dequeue() {
            if self.is_visited(cur) || !grid.is_passable(cur) {
                continue;
            }
            let g = self.distance(cur);
            if g.is_infinite() {
                break;
            }

            self.mark_visited(cur);
            visited.push(cur);
            if cur == target {
                break;
            }

            for step in nb.expand(grid, cur, allow_diagonal, |p| !self.is_visited(p)) {
                let tentative = g + step_cost(grid, step.pos, step.is_diagonal());
                if tentative >= self.distance(step.pos) {
                    continue;
                }
                self.set_distance(step.pos, tentative);
                self.set_previous(step.pos, cur);
                if !open.set_priority(&step.pos, tentative) {
                    open.enqueue(step.pos, tentative);
                }
            }
        }

        visited
    }
}
