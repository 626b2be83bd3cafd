//! Maze generation.
//!
//! Two families of generators, both producing [`Placement`] lists for the
//! caller to apply with [`Grid::apply`](pathviz_core::Grid::apply):
//! - **Recursive division**: a fully walled border, then the interior is
//!   split by walls with gaps until no region can be split further.
//! - **Random fill**: every cell independently rolls a die and becomes a
//!   wall, a weight or stays open.

use std::ops::RangeInclusive;

use pathviz_core::{Bounds, Placement, Pos};
use rand::Rng;

use crate::algorithm::MazeAlgorithm;

/// Die faces used by random fills.
pub const DIE: RangeInclusive<u32> = 1..=10;

/// Which faces of a `1..=10` roll turn a cell into a wall or a weight.
/// A face matching both ranges makes a wall.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillRule {
    pub wall: Option<RangeInclusive<u32>>,
    pub weight: Option<RangeInclusive<u32>>,
}

impl FillRule {
    /// 30% walls.
    pub fn walls() -> Self {
        Self {
            wall: Some(1..=3),
            weight: None,
        }
    }

    /// 30% weights.
    pub fn weights() -> Self {
        Self {
            wall: None,
            weight: Some(1..=3),
        }
    }

    /// 20% walls and 30% weights.
    pub fn walls_and_weights() -> Self {
        Self {
            wall: Some(1..=2),
            weight: Some(8..=10),
        }
    }

    fn place(&self, roll: u32, pos: Pos) -> Option<Placement> {
        if self.wall.as_ref().is_some_and(|r| r.contains(&roll)) {
            Some(Placement::wall(pos))
        } else if self.weight.as_ref().is_some_and(|r| r.contains(&roll)) {
            Some(Placement::weight(pos))
        } else {
            None
        }
    }
}

/// An inclusive rectangle of interior cells still to be divided. `top`
/// and `left` are always odd.
#[derive(Debug, Clone, Copy)]
struct Region {
    top: i32,
    bottom: i32,
    left: i32,
    right: i32,
}

/// Maze generator for a `rows × cols` grid.
pub struct MazeGen<R: Rng> {
    pub rng: R,
    bounds: Bounds,
}

impl<R: Rng> MazeGen<R> {
    /// Create a generator. Negative dimensions are treated as zero.
    pub fn new(rows: i32, cols: i32, rng: R) -> Self {
        Self {
            rng,
            bounds: Bounds::new(rows, cols),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Run `algorithm`.
    pub fn generate(&mut self, algorithm: MazeAlgorithm) -> Vec<Placement> {
        let placements = match algorithm {
            MazeAlgorithm::RecursiveDivision => self.recursive_division(),
            MazeAlgorithm::RandomWall => self.random_fill(&FillRule::walls()),
            MazeAlgorithm::RandomWeight => self.random_fill(&FillRule::weights()),
            MazeAlgorithm::RandomWallWeight => self.random_fill(&FillRule::walls_and_weights()),
        };
        log::debug!(
            "{} maze on {} grid: {} placements",
            algorithm.key(),
            self.bounds,
            placements.len()
        );
        placements
    }

    /// Roll the die once per cell, in row-major order, and place whatever
    /// `rule` says.
    pub fn random_fill(&mut self, rule: &FillRule) -> Vec<Placement> {
        let mut out = Vec::new();
        for p in self.bounds.iter() {
            let roll = self.rng.random_range(DIE);
            out.extend(rule.place(roll, p));
        }
        out
    }

    /// Recursive-division maze.
    ///
    /// The border is always fully walled. Cuts run along even rows or
    /// columns and their gaps sit on odd ones, so cells with an odd row and
    /// an odd column are never walls and stay connected. Orientation
    /// alternates between levels unless a region is too thin to cut that
    /// way. Grids smaller than 3×3 are all border.
    pub fn recursive_division(&mut self) -> Vec<Placement> {
        let b = self.bounds;
        let mut walls: Vec<Pos> = b.iter().filter(|&p| b.on_border(p)).collect();
        if b.rows >= 3 && b.cols >= 3 {
            let interior = Region {
                top: 1,
                bottom: b.rows - 2,
                left: 1,
                right: b.cols - 2,
            };
            let horizontal = self.rng.random_bool(0.5);
            self.divide(&mut walls, interior, horizontal);
        }
        walls.into_iter().map(Placement::wall).collect()
    }

    fn divide(&mut self, walls: &mut Vec<Pos>, r: Region, horizontal: bool) {
        let can_cut_row = r.bottom - r.top >= 2;
        let can_cut_col = r.right - r.left >= 2;
        let horizontal = match (can_cut_row, can_cut_col) {
            (false, false) => return,
            (true, false) => true,
            (false, true) => false,
            (true, true) => horizontal,
        };

        if horizontal {
            let row = self.cut_line(r.top, r.bottom);
            let gaps = self.gaps(r.left, r.right);
            walls.extend(
                (r.left..=r.right)
                    .filter(|c| !gaps.contains(c))
                    .map(|c| Pos::new(row, c)),
            );
            self.divide(walls, Region { bottom: row - 1, ..r }, false);
            self.divide(walls, Region { top: row + 1, ..r }, false);
        } else {
            let col = self.cut_line(r.left, r.right);
            let gaps = self.gaps(r.top, r.bottom);
            walls.extend(
                (r.top..=r.bottom)
                    .filter(|row| !gaps.contains(row))
                    .map(|row| Pos::new(row, col)),
            );
            self.divide(walls, Region { right: col - 1, ..r }, true);
            self.divide(walls, Region { left: col + 1, ..r }, true);
        }
    }

    /// An even line strictly between `lo` (odd) and `hi`.
    fn cut_line(&mut self, lo: i32, hi: i32) -> i32 {
        lo + 1 + 2 * self.rng.random_range(0..(hi - lo) / 2)
    }

    /// Between 1 and `span / 4` gap positions on odd lines in `lo..=hi`.
    fn gaps(&mut self, lo: i32, hi: i32) -> Vec<i32> {
        let slots = (hi - lo) / 2 + 1;
        let count = self.rng.random_range(1..=((hi - lo) / 4).max(1));
        (0..count)
            .map(|_| lo + 2 * self.rng.random_range(0..slots))
            .collect()
    }
}
