//! Pathfinding searches over a [`pathviz_core::Grid`].
//!
//! Four searches are provided, selected through [`Algorithm`]:
//!
//! - **Dijkstra**: cheapest weighted path
//! - **A\***: cheapest weighted path, guided by a [`Heuristic`]
//! - **BFS**: fewest steps, node costs ignored
//! - **DFS**: some path, no guarantee
//!
//! Every search borrows the grid immutably and records its distances,
//! predecessors and visited flags in a fresh [`Traversal`]. The returned
//! [`Search`] holds the visitation order (the animation data for a
//! renderer) and rebuilds the path and its cost on demand.
//!
//! ```
//! use pathviz_core::Grid;
//! use pathviz_paths::{Algorithm, SearchOptions};
//!
//! let grid = Grid::parse("S.#\n..T").unwrap();
//! let result = Algorithm::AStar
//!     .search(&grid, grid.start(), grid.target(), &SearchOptions::default())
//!     .unwrap();
//! assert!(result.reached());
//! assert_eq!(result.path().len(), 4);
//! assert_eq!(result.path_cost(&grid), 3.0);
//! ```

mod astar;
mod bfs;
mod dfs;
mod dijkstra;
mod distance;
mod heuristic;
mod neighbors;
mod options;
mod queue;
mod search;
mod traversal;

pub use distance::{DIAGONAL_SURCHARGE, chebyshev, euclidean, manhattan, octile, step_cost};
pub use heuristic::{
    DEFAULT_MULTIPLIER, Heuristic, HeuristicKind, TIE_BREAK, heuristic, sanitize_multiplier,
};
pub use neighbors::{Neighbors, Step, neighbors};
pub use options::{Algorithm, ParseAlgorithmError, SearchOptions};
pub use queue::PriorityQueue;
pub use search::{Search, SearchStats, search};
pub use traversal::{Traversal, path_cost};
