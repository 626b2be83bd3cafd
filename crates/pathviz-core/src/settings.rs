//! Grid configuration.

use crate::geom::Pos;

/// Dimensions, endpoints and weight cost used to build a fresh grid.
///
/// The defaults reproduce the visualizer's standard board: a 27×71 grid
/// with the start and target on the middle row and weights costing 15.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSettings {
    pub rows: i32,
    pub cols: i32,
    pub start: Pos,
    pub target: Pos,
    /// Cost given to cells painted as weights.
    pub weight_cost: u32,
}

impl GridSettings {
    pub const DEFAULT_ROWS: i32 = 27;
    pub const DEFAULT_COLS: i32 = 71;
    pub const DEFAULT_START: Pos = Pos::new(13, 10);
    pub const DEFAULT_TARGET: Pos = Pos::new(13, 60);
    pub const DEFAULT_WEIGHT_COST: u32 = 15;
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            rows: Self::DEFAULT_ROWS,
            cols: Self::DEFAULT_COLS,
            start: Self::DEFAULT_START,
            target: Self::DEFAULT_TARGET,
            weight_cost: Self::DEFAULT_WEIGHT_COST,
        }
    }
}
