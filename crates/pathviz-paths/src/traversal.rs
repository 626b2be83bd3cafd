use pathviz_core::{Bounds, Grid, Pos};

use crate::distance::step_cost;

// ---------------------------------------------------------------------------
// Traversal
// ---------------------------------------------------------------------------

/// Per-search bookkeeping: best known distance, predecessor and visited
/// flag of every node, indexed by position.
///
/// A fresh `Traversal` is allocated for every search call, so no state can
/// leak from one run into the next. The predecessor links form a tree
/// rooted at the start: a link is only written when a strictly better
/// distance is found (Dijkstra, A*) or when a node is first reached
/// (BFS, DFS).
#[derive(Clone, Debug)]
pub struct Traversal {
    bounds: Bounds,
    distance: Vec<f64>,
    previous: Vec<Option<Pos>>,
    visited: Vec<bool>,
}

impl Traversal {
    pub(crate) fn new(bounds: Bounds) -> Self {
        let len = bounds.len();
        Self {
            bounds,
            distance: vec![f64::INFINITY; len],
            previous: vec![None; len],
            visited: vec![false; len],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Best known distance from the start: accumulated cost for the
    /// weighted searches, hop count for BFS/DFS. Infinite if never reached.
    #[inline]
    pub fn distance(&self, p: Pos) -> f64 {
        self.bounds
            .idx(p)
            .map_or(f64::INFINITY, |i| self.distance[i])
    }

    /// Predecessor of `p` on its best known path.
    #[inline]
    pub fn previous(&self, p: Pos) -> Option<Pos> {
        self.bounds.idx(p).and_then(|i| self.previous[i])
    }

    /// Whether `p` was finalized.
    #[inline]
    pub fn is_visited(&self, p: Pos) -> bool {
        self.bounds.idx(p).is_some_and(|i| self.visited[i])
    }

    /// Whether `p` has a finite distance.
    #[inline]
    pub fn is_reached(&self, p: Pos) -> bool {
        self.distance(p).is_finite()
    }

    #[inline]
    pub(crate) fn set_distance(&mut self, p: Pos, d: f64) {
        if let Some(i) = self.bounds.idx(p) {
            self.distance[i] = d;
        }
    }

    #[inline]
    pub(crate) fn set_previous(&mut self, p: Pos, prev: Pos) {
        if let Some(i) = self.bounds.idx(p) {
            self.previous[i] = Some(prev);
        }
    }

    /// Mark `p` visited. Returns `false` if it already was.
    #[inline]
    pub(crate) fn mark_visited(&mut self, p: Pos) -> bool {
        match self.bounds.idx(p) {
            Some(i) if !self.visited[i] => {
                self.visited[i] = true;
                true
            }
            _ => false,
        }
    }

    /// Walk the predecessor links back from `to`.
    ///
    /// Returns the path in start → `to` order. A node that was never
    /// reached yields just `[to]`.
    pub fn path_to(&self, to: Pos) -> Vec<Pos> {
        let mut path = vec![to];
        let mut cur = to;
        while let Some(prev) = self.previous(cur) {
            debug_assert!(path.len() <= self.bounds.len(), "predecessor cycle at {cur}");
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }

    /// Weighted cost of the path to `to`: the step cost of every node
    /// after the first, diagonal surcharge included. The start node is
    /// free; a lone node costs 0.
    pub fn path_cost_to(&self, grid: &Grid, to: Pos) -> f64 {
        path_cost(grid, &self.path_to(to))
    }
}

/// Weighted cost of walking `path` on `grid`. See
/// [`Traversal::path_cost_to`].
pub fn path_cost(grid: &Grid, path: &[Pos]) -> f64 {
    path.windows(2)
        .map(|w| step_cost(grid, w[1], w[0].is_diagonal_to(w[1])))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    #[test]
    fn fresh_traversal_is_unreached() {
        let t = Traversal::new(Bounds::new(2, 2));
        assert_eq!(t.distance(Pos::new(1, 1)), f64::INFINITY);
        assert_eq!(t.previous(Pos::new(1, 1)), None);
        assert!(!t.is_visited(Pos::new(0, 0)));
        assert!(!t.is_reached(Pos::new(0, 0)));
        assert_eq!(t.distance(Pos::new(5, 5)), f64::INFINITY);
    }

    #[test]
    fn mark_visited_once() {
        let mut t = Traversal::new(Bounds::new(2, 2));
        assert!(t.mark_visited(Pos::new(0, 1)));
        assert!(!t.mark_visited(Pos::new(0, 1)));
        assert!(!t.mark_visited(Pos::new(9, 9)));
        assert!(t.is_visited(Pos::new(0, 1)));
    }

    #[test]
    fn path_follows_predecessors() {
        let mut t = Traversal::new(Bounds::new(3, 3));
        t.set_previous(Pos::new(1, 1), Pos::new(0, 0));
        t.set_previous(Pos::new(1, 2), Pos::new(1, 1));
        assert_eq!(
            t.path_to(Pos::new(1, 2)),
            vec![Pos::new(0, 0), Pos::new(1, 1), Pos::new(1, 2)]
        );
        assert_eq!(t.path_to(Pos::new(2, 2)), vec![Pos::new(2, 2)]);

        let mut g = Grid::new(3, 3, Pos::new(0, 0), Pos::new(1, 2)).unwrap();
        g.set_cost(Pos::new(1, 1), 4).unwrap();
        let cost = t.path_cost_to(&g, Pos::new(1, 2));
        assert!((cost - (4.0 + (SQRT_2 - 1.0) + 1.0)).abs() < 1e-12);
        assert_eq!(t.path_cost_to(&g, Pos::new(2, 2)), 0.0);
    }
}
