//! **pathviz-core** — grid and node model for the pathfinding visualizer.
//!
//! This crate provides the data the search algorithms run over: geometry
//! primitives, the immutable [`Node`], the [`Grid`] container with its
//! editing operations, maze [`Placement`]s and the [`GridSettings`]
//! configuration.

pub mod error;
pub mod geom;
pub mod grid;
pub mod node;
pub mod placement;
pub mod settings;

pub use error::{GridError, Role};
pub use geom::{Bounds, BoundsIter, Dir, Pos};
pub use grid::Grid;
pub use node::{DEFAULT_COST, Node, clamp_cost};
pub use placement::{Placement, PlacementKind};
pub use settings::GridSettings;
