//! The search entry point and its result type.

use pathviz_core::{Grid, GridError, Pos, Role};

use crate::heuristic::Heuristic;
use crate::options::{Algorithm, SearchOptions};
use crate::traversal::Traversal;

/// Run `algorithm` on `grid` from `start` to `target`.
///
/// Both endpoints must be in bounds and not walls; anything else is a
/// caller error reported before the search starts. An unreachable target
/// is not an error: the search explores what it can and
/// [`Search::reached`] reports `false`.
pub fn search(
    grid: &Grid,
    algorithm: Algorithm,
    start: Pos,
    target: Pos,
    options: &SearchOptions,
) -> Result<Search, GridError> {
    grid.check_endpoint(Role::Start, start)?;
    grid.check_endpoint(Role::Target, target)?;

    log::debug!(
        "{} search {start} -> {target} on {} grid (diagonal: {})",
        algorithm.key(),
        grid.bounds(),
        options.allow_diagonal
    );

    let diag = options.allow_diagonal;
    let mut traversal = Traversal::new(grid.bounds());
    let visited = match algorithm {
        Algorithm::Dijkstra => traversal.dijkstra(grid, start, target, diag),
        Algorithm::AStar => {
            let h = Heuristic::new(
                options.heuristic_kind(),
                options.heuristic_multiplier,
                start,
                target,
            );
            traversal.astar(grid, start, target, diag, &h)
        }
        Algorithm::Bfs => traversal.bfs(grid, start, target, diag),
        Algorithm::Dfs => traversal.dfs(grid, start, target, diag),
    };

    let result = Search {
        algorithm,
        start,
        target,
        visited,
        traversal,
    };
    log::debug!(
        "{} visited {} nodes, target {}",
        algorithm.key(),
        result.visited.len(),
        if result.reached() { "reached" } else { "unreachable" }
    );
    Ok(result)
}

/// Counters shown next to a finished search.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Nodes finalized by the search.
    pub visited: usize,
    /// Nodes on the reconstructed path, endpoints included. Zero when the
    /// target was not reached.
    pub path_nodes: usize,
    /// Weighted cost of the path.
    pub path_cost: f64,
}

/// The outcome of one search: the visitation order plus the traversal
/// state needed to rebuild paths.
#[derive(Clone, Debug)]
pub struct Search {
    algorithm: Algorithm,
    start: Pos,
    target: Pos,
    visited: Vec<Pos>,
    traversal: Traversal,
}

impl Search {
    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Pos {
        self.target
    }

    /// Nodes in the order they were finalized. On success the target is
    /// the last element; it never appears otherwise.
    #[inline]
    pub fn visited(&self) -> &[Pos] {
        &self.visited
    }

    /// Distances, predecessors and visited flags of this run.
    #[inline]
    pub fn traversal(&self) -> &Traversal {
        &self.traversal
    }

    /// Whether the target was finalized.
    #[inline]
    pub fn reached(&self) -> bool {
        self.traversal.is_visited(self.target)
    }

    /// Path from start to target. `[target]` alone means no path.
    pub fn path(&self) -> Vec<Pos> {
        self.traversal.path_to(self.target)
    }

    /// Weighted cost of [`path`](Self::path): the cost of every node
    /// entered after the start, target included, plus the diagonal
    /// surcharge for diagonal steps. Zero when start equals target or the
    /// target was not reached.
    pub fn path_cost(&self, grid: &Grid) -> f64 {
        self.traversal.path_cost_to(grid, self.target)
    }

    pub fn stats(&self, grid: &Grid) -> SearchStats {
        let path_nodes = if self.reached() { self.path().len() } else { 0 };
        SearchStats {
            visited: self.visited.len(),
            path_nodes,
            path_cost: self.path_cost(grid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_endpoints() {
        let g = Grid::parse("S#\n.T").unwrap();
        let opts = SearchOptions::default();
        for a in Algorithm::ALL {
            assert!(matches!(
                search(&g, a, Pos::new(0, 1), g.target(), &opts),
                Err(GridError::WallEndpoint { role: Role::Start, .. })
            ));
            assert!(matches!(
                search(&g, a, g.start(), Pos::new(2, 0), &opts),
                Err(GridError::OutOfBounds { role: Role::Target, .. })
            ));
        }
    }

    #[test]
    fn start_equals_target() {
        let g = Grid::parse("S..\n...\n..T").unwrap();
        let opts = SearchOptions::default();
        for a in Algorithm::ALL {
            let s = a.search(&g, g.start(), g.start(), &opts).unwrap();
            assert_eq!(s.visited(), &[g.start()]);
            assert!(s.reached());
            assert_eq!(s.path(), vec![g.start()]);
            assert_eq!(s.path_cost(&g), 0.0);
            assert_eq!(
                s.stats(&g),
                SearchStats { visited: 1, path_nodes: 1, path_cost: 0.0 }
            );
        }
    }

    #[test]
    fn stats_count_path_and_cost() {
        let g = Grid::parse("S.T").unwrap();
        let s = Algorithm::Bfs
            .search(&g, g.start(), g.target(), &SearchOptions::default())
            .unwrap();
        assert_eq!(s.algorithm(), Algorithm::Bfs);
        assert_eq!(s.start(), Pos::new(0, 0));
        assert_eq!(s.target(), Pos::new(0, 2));
        assert_eq!(
            s.stats(&g),
            SearchStats { visited: 3, path_nodes: 3, path_cost: 2.0 }
        );
    }
}
