//! Errors raised when a grid is built or edited in violation of its
//! invariants.

use std::fmt;

use crate::geom::{Bounds, Pos};

/// Which cell an error is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Start,
    Target,
    Cell,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Start => "start",
            Role::Target => "target",
            Role::Cell => "cell",
        })
    }
}

/// Errors that can occur when building, parsing or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// The grid has zero rows or zero columns.
    #[error("grid must have at least one row and one column")]
    Empty,
    /// A row's length differs from the first row's.
    #[error("grid is not rectangular: row {row} has {len} cells, expected {expected}")]
    NotRectangular {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("{role} {pos} is outside the {bounds} grid")]
    OutOfBounds { role: Role, pos: Pos, bounds: Bounds },
    #[error("{role} {pos} is a wall")]
    WallEndpoint { role: Role, pos: Pos },
    /// A character outside the text alphabet (`.#ST1-9`).
    #[error("invalid grid character {ch:?} at {pos}")]
    InvalidChar { ch: char, pos: Pos },
    #[error("grid text has no {0} cell")]
    MissingEndpoint(Role),
    #[error("grid text has more than one {0} cell")]
    DuplicateEndpoint(Role),
    /// A serialized grid whose node list does not cover its bounds.
    #[error("grid has {len} nodes, expected {expected}")]
    NodeCount { len: usize, expected: usize },
    /// A serialized node stored at the wrong index.
    #[error("node {index} is at {pos}, expected {expected}")]
    NodeOutOfPlace {
        index: usize,
        pos: Pos,
        expected: Pos,
    },
    /// A node's start or target flag disagrees with the grid's endpoint.
    #[error("{role} flag at {pos} does not match the grid's {role}")]
    EndpointMismatch { role: Role, pos: Pos },
}
