use std::f64::consts::SQRT_2;

use pathviz_core::{Grid, Pos};

/// Extra cost of a diagonal step over a cardinal one into the same node.
pub const DIAGONAL_SURCHARGE: f64 = SQRT_2 - 1.0;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    let (dr, dc) = a.abs_delta(b);
    dr + dc
}

/// Chebyshev (L∞) distance between two positions.
#[inline]
pub fn chebyshev(a: Pos, b: Pos) -> i32 {
    let (dr, dc) = a.abs_delta(b);
    dr.max(dc)
}

/// Octile distance: the cost of the cheapest 8-way route on a unit-cost
/// grid, with diagonal steps costing `sqrt(2)`.
#[inline]
pub fn octile(a: Pos, b: Pos) -> f64 {
    let (dr, dc) = a.abs_delta(b);
    f64::from(dr.max(dc)) + DIAGONAL_SURCHARGE * f64::from(dr.min(dc))
}

/// Straight-line distance between two positions.
#[inline]
pub fn euclidean(a: Pos, b: Pos) -> f64 {
    let (dr, dc) = a.abs_delta(b);
    f64::from(dr).hypot(f64::from(dc))
}

/// Cost of stepping into `to`: its node cost, plus
/// [`DIAGONAL_SURCHARGE`] for a diagonal step.
#[inline]
pub fn step_cost(grid: &Grid, to: Pos, diagonal: bool) -> f64 {
    let base = f64::from(grid.cost(to));
    if diagonal {
        base + DIAGONAL_SURCHARGE
    } else {
        base
    }
}
