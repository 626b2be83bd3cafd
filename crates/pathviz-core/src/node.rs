//! The [`Node`] type: one grid cell with its static role and cost.

use crate::geom::Pos;

/// Cost of entering an unweighted node.
pub const DEFAULT_COST: u32 = 1;

/// One grid cell.
///
/// A node only carries what the user painted: its role and its cost.
/// Traversal state (distances, predecessors, visited flags) lives in a
/// per-search structure and never on the node itself.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pos: Pos,
    cost: u32,
    is_wall: bool,
    is_start: bool,
    is_target: bool,
}

impl Node {
    /// An open node with [`DEFAULT_COST`].
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            cost: DEFAULT_COST,
            is_wall: false,
            is_start: false,
            is_target: false,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    /// Cost of entering this node. Always at least 1.
    #[inline]
    pub const fn cost(&self) -> u32 {
        self.cost
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        self.is_wall
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub const fn is_target(&self) -> bool {
        self.is_target
    }

    /// Whether the node carries a cost above [`DEFAULT_COST`].
    #[inline]
    pub const fn is_weighted(&self) -> bool {
        self.cost > DEFAULT_COST
    }

    /// Whether searches may enter this node.
    #[inline]
    pub const fn is_passable(&self) -> bool {
        !self.is_wall
    }

    /// Whether the node is the start or the target.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_target
    }

    // Mutation is reserved to `Grid`, which upholds the endpoint invariants.

    #[inline]
    pub(crate) fn set_cost(&mut self, cost: u32) {
        self.cost = clamp_cost(cost);
    }

    #[inline]
    pub(crate) fn set_wall(&mut self, wall: bool) {
        self.is_wall = wall;
    }

    #[inline]
    pub(crate) fn set_start(&mut self, start: bool) {
        self.is_start = start;
    }

    #[inline]
    pub(crate) fn set_target(&mut self, target: bool) {
        self.is_target = target;
    }

    /// Symbol used by the text form of a grid.
    pub fn symbol(&self) -> char {
        if self.is_start {
            'S'
        } else if self.is_target {
            'T'
        } else if self.is_wall {
            '#'
        } else if self.cost == DEFAULT_COST {
            '.'
        } else {
            char::from_digit(self.cost.min(9), 10).unwrap_or('9')
        }
    }
}

/// Clamp a caller-supplied node cost to the valid range (`>= 1`).
///
/// A zero cost would make the weighted searches and the A* heuristic
/// unsound, so it is raised to [`DEFAULT_COST`] with a warning instead of
/// being rejected.
#[inline]
pub fn clamp_cost(cost: u32) -> u32 {
    if cost == 0 {
        log::warn!("node cost 0 clamped to {DEFAULT_COST}");
        DEFAULT_COST
    } else {
        cost
    }
}
