//! Distance estimates for A*.

use std::f64::consts::SQRT_2;

use pathviz_core::Pos;

/// Weight of the cross-product tie-break term.
pub const TIE_BREAK: f64 = 0.001;

/// Multiplier used when the caller supplies none or an invalid one.
pub const DEFAULT_MULTIPLIER: f64 = 1.0;

/// The distance estimate A* ranks its frontier by.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum HeuristicKind {
    /// `m * (dr + dc)`. Matches 4-way movement.
    Manhattan,
    /// `m * (dr + dc) + (sqrt(2) - 2m) * min(dr, dc)`. Matches 8-way movement.
    Octile,
    /// `sqrt(dr² + dc²)`. Ignores the multiplier.
    Euclidean,
}

impl HeuristicKind {
    /// The estimate matching a movement mode.
    #[inline]
    pub fn for_movement(allow_diagonal: bool) -> Self {
        if allow_diagonal {
            HeuristicKind::Octile
        } else {
            HeuristicKind::Manhattan
        }
    }
}

/// Clamp a UI-supplied multiplier: anything non-finite or not positive
/// falls back to [`DEFAULT_MULTIPLIER`].
pub fn sanitize_multiplier(multiplier: f64) -> f64 {
    if multiplier.is_finite() && multiplier > 0.0 {
        multiplier
    } else {
        log::warn!("heuristic multiplier {multiplier} replaced by {DEFAULT_MULTIPLIER}");
        DEFAULT_MULTIPLIER
    }
}

/// A heuristic bound to one search's start and target.
///
/// The estimate is admissible for multipliers up to 1 as long as every
/// node costs at least 1. Larger multipliers trade optimality for fewer
/// expanded nodes. The tie-break term may overestimate by at most
/// `TIE_BREAK * |cross|`, which stays below the smallest cost difference
/// between distinct routes on grids of practical size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Heuristic {
    kind: HeuristicKind,
    multiplier: f64,
    start: Pos,
    target: Pos,
}

impl Heuristic {
    /// Create a heuristic towards `target`. The multiplier goes through
    /// [`sanitize_multiplier`].
    pub fn new(kind: HeuristicKind, multiplier: f64, start: Pos, target: Pos) -> Self {
        Self {
            kind,
            multiplier: sanitize_multiplier(multiplier),
            start,
            target,
        }
    }

    #[inline]
    pub fn kind(&self) -> HeuristicKind {
        self.kind
    }

    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The distance estimate from `cur` to the target, without tie-breaking.
    pub fn base(&self, cur: Pos) -> f64 {
        let (dr, dc) = cur.abs_delta(self.target);
        let (dr, dc) = (f64::from(dr), f64::from(dc));
        let m = self.multiplier;
        match self.kind {
            HeuristicKind::Manhattan => m * (dr + dc),
            HeuristicKind::Octile => m * (dr + dc) + (SQRT_2 - 2.0 * m) * dr.min(dc),
            HeuristicKind::Euclidean => dr.hypot(dc),
        }
    }

    /// Small bonus proportional to how far `cur` strays from the straight
    /// line between start and target.
    pub fn tie_break(&self, cur: Pos) -> f64 {
        let d = cur - self.target;
        let s = self.start - self.target;
        let cross =
            (i64::from(d.col) * i64::from(s.row) - i64::from(s.col) * i64::from(d.row)).abs();
        cross as f64 * TIE_BREAK
    }

    /// `base + tie_break`: the value A* adds to the cost-from-start.
    #[inline]
    pub fn estimate(&self, cur: Pos) -> f64 {
        self.base(cur) + self.tie_break(cur)
    }
}

/// One-shot estimate from `current` to `target`, using the kind that
/// matches the movement mode.
pub fn heuristic(
    current: Pos,
    start: Pos,
    target: Pos,
    allow_diagonal: bool,
    multiplier: f64,
) -> f64 {
    Heuristic::new(
        HeuristicKind::for_movement(allow_diagonal),
        multiplier,
        start,
        target,
    )
    .estimate(current)
}
