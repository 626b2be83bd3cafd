//! Wall and weight placements produced by maze generators.

use crate::geom::Pos;

/// What a [`Placement`] puts on its cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlacementKind {
    Wall,
    Weight,
}

/// A single cell edit, applied with [`Grid::apply`](crate::Grid::apply).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Placement {
    pub pos: Pos,
    pub kind: PlacementKind,
}

impl Placement {
    /// Make `pos` a wall.
    #[inline]
    pub const fn wall(pos: Pos) -> Self {
        Self {
            pos,
            kind: PlacementKind::Wall,
        }
    }

    /// Give `pos` the caller's weight cost.
    #[inline]
    pub const fn weight(pos: Pos) -> Self {
        Self {
            pos,
            kind: PlacementKind::Weight,
        }
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self.kind, PlacementKind::Wall)
    }
}
