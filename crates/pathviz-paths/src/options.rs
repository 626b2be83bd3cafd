//! Algorithm selection and search settings.

use std::fmt;
use std::str::FromStr;

use pathviz_core::{Grid, GridError, Pos};

use crate::heuristic::{DEFAULT_MULTIPLIER, HeuristicKind};
use crate::search::{Search, search};

/// The four graph searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    Dijkstra,
    #[cfg_attr(feature = "serde", serde(rename = "astar"))]
    AStar,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::Bfs,
        Algorithm::Dfs,
    ];

    /// Short machine-readable key.
    pub const fn key(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
        }
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra",
            Algorithm::AStar => "A* (A-Star)",
            Algorithm::Bfs => "Breadth First Search",
            Algorithm::Dfs => "Depth First Search",
        }
    }

    /// Whether the search takes node costs into account.
    pub const fn is_weighted(self) -> bool {
        matches!(self, Algorithm::Dijkstra | Algorithm::AStar)
    }

    /// Whether the returned path is guaranteed shortest: cheapest for the
    /// weighted searches, fewest steps for BFS. DFS guarantees nothing.
    pub const fn guarantees_shortest(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }

    /// Run this algorithm from `start` to `target`.
    pub fn search(
        self,
        grid: &Grid,
        start: Pos,
        target: Pos,
        options: &SearchOptions,
    ) -> Result<Search, GridError> {
        search(grid, self, start, target, options)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a string names no known algorithm.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pathfinding algorithm {0:?}")]
pub struct ParseAlgorithmError(pub String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    /// Accepts the [`key`](Algorithm::key) or the [`name`](Algorithm::name),
    /// ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s) || a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAlgorithmError(s.to_owned()))
    }
}

/// Settings shared by all searches.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchOptions {
    /// Allow the four diagonal moves in addition to the cardinal ones.
    pub allow_diagonal: bool,
    /// A* heuristic multiplier. Invalid values fall back to 1.
    pub heuristic_multiplier: f64,
    /// A* heuristic. `None` picks the one matching the movement mode.
    pub heuristic: Option<HeuristicKind>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            allow_diagonal: false,
            heuristic_multiplier: DEFAULT_MULTIPLIER,
            heuristic: None,
        }
    }
}

impl SearchOptions {
    pub fn with_diagonal(mut self, allow_diagonal: bool) -> Self {
        self.allow_diagonal = allow_diagonal;
        self
    }

    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.heuristic_multiplier = multiplier;
        self
    }

    pub fn with_heuristic(mut self, kind: HeuristicKind) -> Self {
        self.heuristic = Some(kind);
        self
    }

    /// The heuristic A* will use.
    pub fn heuristic_kind(&self) -> HeuristicKind {
        self.heuristic
            .unwrap_or_else(|| HeuristicKind::for_movement(self.allow_diagonal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keys_and_names() {
        for a in Algorithm::ALL {
            assert_eq!(a.key().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.name().parse::<Algorithm>(), Ok(a));
            assert_eq!(a.to_string(), a.name());
        }
        assert_eq!("  BFS ".parse::<Algorithm>(), Ok(Algorithm::Bfs));
        assert_eq!(
            "greedy".parse::<Algorithm>(),
            Err(ParseAlgorithmError("greedy".into()))
        );
    }

    #[test]
    fn metadata() {
        assert!(Algorithm::Dijkstra.is_weighted());
        assert!(Algorithm::AStar.is_weighted());
        assert!(!Algorithm::Bfs.is_weighted());
        assert!(Algorithm::Bfs.guarantees_shortest());
        assert!(!Algorithm::Dfs.guarantees_shortest());
    }

    #[test]
    fn heuristic_follows_movement_unless_set() {
        let o = SearchOptions::default();
        assert_eq!(o.heuristic_kind(), HeuristicKind::Manhattan);
        assert_eq!(o.clone().with_diagonal(true).heuristic_kind(), HeuristicKind::Octile);
        assert_eq!(
            o.with_heuristic(HeuristicKind::Euclidean).heuristic_kind(),
            HeuristicKind::Euclidean
        );
    }
}
