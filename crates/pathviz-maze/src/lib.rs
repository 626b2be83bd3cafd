//! Maze generators for the pathfinding visualizer: recursive division and
//! random wall/weight fills.

pub mod algorithm;
pub mod mapgen;

pub use algorithm::{MazeAlgorithm, ParseMazeError};
pub use mapgen::{DIE, FillRule, MazeGen};
