//! The [`Grid`] type: a rectangular array of [`Node`]s with exactly one
//! start and one target.
//!
//! The grid owns only what the user painted. Searches borrow it immutably
//! and keep their traversal state elsewhere, so a grid can be searched any
//! number of times without being rebuilt.

use std::fmt;
use std::str::FromStr;

use crate::error::{GridError, Role};
use crate::geom::{Bounds, Pos};
use crate::node::{DEFAULT_COST, Node};
use crate::placement::{Placement, PlacementKind};
use crate::settings::GridSettings;

/// A `rows × cols` grid of nodes.
///
/// Deserialization runs the same checks as [`Grid::new`] plus a
/// consistency check of the node list, so a malformed document is
/// rejected with a [`GridError`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    bounds: Bounds,
    nodes: Vec<Node>,
    start: Pos,
    target: Pos,
}

impl Grid {
    /// Create an open grid with the given endpoints.
    ///
    /// Start and target may coincide.
    pub fn new(rows: i32, cols: i32, start: Pos, target: Pos) -> Result<Self, GridError> {
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        check_in_bounds(bounds, Role::Start, start)?;
        check_in_bounds(bounds, Role::Target, target)?;

        let mut nodes: Vec<Node> = bounds.iter().map(Node::new).collect();
        let si = bounds.pos_idx(start);
        let ti = bounds.pos_idx(target);
        nodes[si].set_start(true);
        nodes[ti].set_target(true);

        Ok(Self {
            bounds,
            nodes,
            start,
            target,
        })
    }

    /// Create an open grid from [`GridSettings`].
    pub fn from_settings(settings: &GridSettings) -> Result<Self, GridError> {
        Self::new(settings.rows, settings.cols, settings.start, settings.target)
    }

    /// Parse the text form of a grid.
    ///
    /// One line per row: `.` open, `#` wall, `S` start, `T` target and
    /// `1`-`9` a node cost. Leading and trailing blank lines are ignored
    /// and every row must have the same length.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text
            .trim_matches('\n')
            .lines()
            .map(|l| l.trim_end_matches('\r'))
            .collect();
        let expected = lines.first().map_or(0, |l| l.chars().count());
        if lines.is_empty() || expected == 0 {
            return Err(GridError::Empty);
        }

        let mut start = None;
        let mut target = None;
        let mut cells = Vec::with_capacity(lines.len() * expected);
        for (row, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if len != expected {
                return Err(GridError::NotRectangular { row, len, expected });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    'S' => record_endpoint(&mut start, Role::Start, pos)?,
                    'T' => record_endpoint(&mut target, Role::Target, pos)?,
                    '.' | '#' | '1'..='9' => {}
                    _ => return Err(GridError::InvalidChar { ch, pos }),
                }
                cells.push((pos, ch));
            }
        }

        let start = start.ok_or(GridError::MissingEndpoint(Role::Start))?;
        let target = target.ok_or(GridError::MissingEndpoint(Role::Target))?;
        let mut grid = Self::new(lines.len() as i32, expected as i32, start, target)?;
        for (pos, ch) in cells {
            let node = grid.node_mut(pos);
            match ch {
                '#' => node.set_wall(true),
                '1'..='9' => node.set_cost(ch.to_digit(10).unwrap_or(DEFAULT_COST)),
                _ => {}
            }
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn target(&self) -> Pos {
        self.target
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The node at `p`, or `None` if out of bounds.
    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.bounds.idx(p).map(|i| &self.nodes[i])
    }

    /// Whether `p` is in bounds and not a wall.
    #[inline]
    pub fn is_passable(&self, p: Pos) -> bool {
        self.node(p).is_some_and(Node::is_passable)
    }

    /// Cost of entering `p`. Out-of-bounds positions report the default cost.
    #[inline]
    pub fn cost(&self, p: Pos) -> u32 {
        self.node(p).map_or(DEFAULT_COST, Node::cost)
    }

    /// Every node in row-major order.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> + '_ {
        self.nodes.iter()
    }

    /// Number of wall nodes.
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall()).count()
    }

    /// Number of weighted nodes.
    pub fn weight_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_weighted()).count()
    }

    /// Check that `pos` can serve as the `role` endpoint of a search:
    /// in bounds and not a wall.
    pub fn check_endpoint(&self, role: Role, pos: Pos) -> Result<(), GridError> {
        check_in_bounds(self.bounds, role, pos)?;
        if !self.is_passable(pos) {
            return Err(GridError::WallEndpoint { role, pos });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Editing
    // -----------------------------------------------------------------------

    /// Make `p` a wall or clear it. Endpoints are never walled; the call
    /// is ignored for them. Returns whether the node changed.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> Result<bool, GridError> {
        check_in_bounds(self.bounds, Role::Cell, p)?;
        let node = self.node_mut(p);
        if node.is_endpoint() || node.is_wall() == wall {
            return Ok(false);
        }
        node.set_wall(wall);
        Ok(true)
    }

    /// Flip the wall state of `p`. Returns whether the node changed.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<bool, GridError> {
        let wall = self.node(p).is_some_and(Node::is_wall);
        self.set_wall(p, !wall)
    }

    /// Set the cost of entering `p`. A cost of 0 is clamped to 1.
    /// Endpoints keep the default cost; the call is ignored for them.
    /// Returns whether the node changed.
    pub fn set_cost(&mut self, p: Pos, cost: u32) -> Result<bool, GridError> {
        check_in_bounds(self.bounds, Role::Cell, p)?;
        let node = self.node_mut(p);
        let before = node.cost();
        if node.is_endpoint() {
            return Ok(false);
        }
        node.set_cost(cost);
        Ok(node.cost() != before)
    }

    /// Move the start to `p`.
    pub fn set_start(&mut self, p: Pos) -> Result<(), GridError> {
        self.check_endpoint(Role::Start, p)?;
        let old = self.start;
        self.node_mut(old).set_start(false);
        let node = self.node_mut(p);
        node.set_start(true);
        node.set_cost(DEFAULT_COST);
        self.start = p;
        Ok(())
    }

    /// Move the target to `p`.
    pub fn set_target(&mut self, p: Pos) -> Result<(), GridError> {
        self.check_endpoint(Role::Target, p)?;
        let old = self.target;
        self.node_mut(old).set_target(false);
        let node = self.node_mut(p);
        node.set_target(true);
        node.set_cost(DEFAULT_COST);
        self.target = p;
        Ok(())
    }

    /// Remove every wall. Returns how many were removed.
    pub fn clear_walls(&mut self) -> usize {
        let mut n = 0;
        for node in self.nodes.iter_mut().filter(|n| n.is_wall()) {
            node.set_wall(false);
            n += 1;
        }
        n
    }

    /// Reset every weighted node to the default cost. Returns how many
    /// were reset.
    pub fn clear_weights(&mut self) -> usize {
        let mut n = 0;
        for node in self.nodes.iter_mut().filter(|n| n.is_weighted()) {
            node.set_cost(DEFAULT_COST);
            n += 1;
        }
        n
    }

    /// Remove every wall and weight, keeping the endpoints.
    pub fn clear(&mut self) {
        self.clear_walls();
        self.clear_weights();
    }

    /// Apply maze placements. Weights get `weight_cost`. Placements on an
    /// endpoint or outside the grid are skipped. Returns the number of
    /// nodes that changed.
    pub fn apply(&mut self, placements: &[Placement], weight_cost: u32) -> usize {
        let mut changed = 0;
        let mut skipped = 0;
        for pl in placements {
            let Some(i) = self.bounds.idx(pl.pos) else {
                skipped += 1;
                continue;
            };
            let node = &mut self.nodes[i];
            if node.is_endpoint() {
                skipped += 1;
                continue;
            }
            let before = *node;
            match pl.kind {
                PlacementKind::Wall => node.set_wall(true),
                PlacementKind::Weight => {
                    node.set_wall(false);
                    node.set_cost(weight_cost);
                }
            }
            if *node != before {
                changed += 1;
            }
        }
        log::debug!(
            "applied {} placements: {changed} changed, {skipped} skipped",
            placements.len()
        );
        changed
    }

    /// Rebuild the grid with new dimensions, keeping the walls, weights
    /// and endpoints that still fit. Endpoints outside the new bounds are
    /// clamped into range; a wall under a relocated endpoint is cleared.
    pub fn resized(&self, rows: i32, cols: i32) -> Result<Self, GridError> {
        let bounds = Bounds::new(rows, cols);
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        let start = bounds.clamp(self.start);
        let target = bounds.clamp(self.target);
        let mut grid = Self::new(rows, cols, start, target)?;
        for node in self.nodes.iter().filter(|n| bounds.contains(n.pos())) {
            let dst = grid.node_mut(node.pos());
            if dst.is_endpoint() {
                continue;
            }
            dst.set_wall(node.is_wall());
            dst.set_cost(node.cost());
        }
        Ok(grid)
    }

    #[inline]
    fn node_mut(&mut self, p: Pos) -> &mut Node {
        let i = self.bounds.pos_idx(p);
        &mut self.nodes[i]
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unchecked serialized form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    bounds: Bounds,
    nodes: Vec<Node>,
    start: Pos,
    target: Pos,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = GridError;

    fn try_from(raw: GridRepr) -> Result<Self, Self::Error> {
        let bounds = Bounds::new(raw.bounds.rows, raw.bounds.cols);
        if bounds.is_empty() {
            return Err(GridError::Empty);
        }
        if raw.nodes.len() != bounds.len() {
            return Err(GridError::NodeCount {
                len: raw.nodes.len(),
                expected: bounds.len(),
            });
        }

        let mut grid = Self::new(bounds.rows, bounds.cols, raw.start, raw.target)?;
        for (index, node) in raw.nodes.iter().enumerate() {
            let expected = bounds.pos(index);
            if node.pos() != expected {
                return Err(GridError::NodeOutOfPlace {
                    index,
                    pos: node.pos(),
                    expected,
                });
            }
            for (role, flagged, endpoint) in [
                (Role::Start, node.is_start(), raw.start),
                (Role::Target, node.is_target(), raw.target),
            ] {
                if flagged != (expected == endpoint) {
                    return Err(GridError::EndpointMismatch { role, pos: expected });
                }
            }
            if node.is_endpoint() {
                if node.is_wall() {
                    let role = if node.is_start() { Role::Start } else { Role::Target };
                    return Err(GridError::WallEndpoint { role, pos: expected });
                }
                continue;
            }
            let dst = grid.node_mut(expected);
            dst.set_wall(node.is_wall());
            dst.set_cost(node.cost());
        }
        Ok(grid)
    }
}

/// One character per node, rows separated by newlines; see
/// [`Grid::parse`] for the alphabet.
///
/// Costs above 9 are written as `9`, so a grid with heavier weights does
/// not survive a round trip through text. Use the serde form for that.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.bounds.rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.bounds.cols {
                let i = self.bounds.pos_idx(Pos::new(row, col));
                write!(f, "{}", self.nodes[i].symbol())?;
            }
        }
        Ok(())
    }
}

fn check_in_bounds(bounds: Bounds, role: Role, pos: Pos) -> Result<(), GridError> {
    if bounds.contains(pos) {
        Ok(())
    } else {
        Err(GridError::OutOfBounds { role, pos, bounds })
    }
}

fn record_endpoint(slot: &mut Option<Pos>, role: Role, pos: Pos) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(GridError::DuplicateEndpoint(role));
    }
    *slot = Some(pos);
    Ok(())
}
