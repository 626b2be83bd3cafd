use std::fmt;
use std::str::FromStr;

/// The available maze generators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MazeAlgorithm {
    RecursiveDivision,
    RandomWall,
    RandomWeight,
    RandomWallWeight,
}

impl MazeAlgorithm {
    pub const ALL: [MazeAlgorithm; 4] = [
        MazeAlgorithm::RecursiveDivision,
        MazeAlgorithm::RandomWall,
        MazeAlgorithm::RandomWeight,
        MazeAlgorithm::RandomWallWeight,
    ];

    pub const fn key(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveDivision => "recursive-division",
            MazeAlgorithm::RandomWall => "random-wall",
            MazeAlgorithm::RandomWeight => "random-weight",
            MazeAlgorithm::RandomWallWeight => "random-wall-weight",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            MazeAlgorithm::RecursiveDivision => "Recursive Division",
            MazeAlgorithm::RandomWall => "Random Wall",
            MazeAlgorithm::RandomWeight => "Random Weight",
            MazeAlgorithm::RandomWallWeight => "Random Wall/Weight",
        }
    }

    /// Whether the output can contain weights.
    pub const fn places_weights(self) -> bool {
        matches!(
            self,
            MazeAlgorithm::RandomWeight | MazeAlgorithm::RandomWallWeight
        )
    }
}

impl fmt::Display for MazeAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown maze algorithm {0:?}")]
pub struct ParseMazeError(pub String);

impl FromStr for MazeAlgorithm {
    type Err = ParseMazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        MazeAlgorithm::ALL
            .into_iter()
            .find(|a| a.key().eq_ignore_ascii_case(s) || a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseMazeError(s.to_owned()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_key() {
        for a in MazeAlgorithm::ALL {
            let json = serde_json::to_string(&a).unwrap();
            assert_eq!(json, format!("\"{}\"", a.key()));
            let back: MazeAlgorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(back, a);
        }
    }
}
