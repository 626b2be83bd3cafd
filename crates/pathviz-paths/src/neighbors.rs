use pathviz_core::{Dir, Grid, Pos};

/// One candidate move produced by [`Neighbors`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub pos: Pos,
    pub dir: Dir,
}

impl Step {
    #[inline]
    pub fn is_diagonal(&self) -> bool {
        self.dir.is_diagonal()
    }
}

/// Cached neighbor computation helper.
///
/// Enumerates the passable neighbors of a grid position in a fixed order:
/// north, east, south, west, then (with diagonals enabled) north-east,
/// south-east, south-west, north-west. Depth-first search relies on this
/// order to be reproducible.
pub struct Neighbors {
    buf: Vec<Step>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// In-bounds, non-wall neighbors of `p` for which `keep` returns `true`.
    pub fn expand(
        &mut self,
        grid: &Grid,
        p: Pos,
        allow_diagonal: bool,
        keep: impl Fn(Pos) -> bool,
    ) -> &[Step] {
        self.buf.clear();
        let diagonals: &[Dir] = if allow_diagonal { &Dir::DIAGONAL } else { &[] };
        for &dir in Dir::CARDINAL.iter().chain(diagonals) {
            let n = p.step(dir);
            if grid.is_passable(n) && keep(n) {
                self.buf.push(Step { pos: n, dir });
            }
        }
        &self.buf
    }
}

/// Passable neighbors of `p` that `visited` does not report as visited.
pub fn neighbors(
    grid: &Grid,
    p: Pos,
    allow_diagonal: bool,
    visited: impl Fn(Pos) -> bool,
) -> Vec<Step> {
    let mut nb = Neighbors::new();
    nb.expand(grid, p, allow_diagonal, |n| !visited(n)).to_vec()
}
