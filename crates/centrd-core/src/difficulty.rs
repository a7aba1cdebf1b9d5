//! Difficulty bands.

use std::ops::RangeInclusive;

/// Puzzle difficulty.
///
/// Each difficulty maps to a [`DifficultyBand`] describing the grid sizes and
/// dot counts the generator draws from.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    derive_more::Display,
    derive_more::IsVariant,
)]
pub enum Difficulty {
    /// Small grids with few dots.
    #[default]
    #[display("easy")]
    Easy,
    /// Medium grids.
    #[display("medium")]
    Medium,
    /// Large grids with many dots.
    #[display("hard")]
    Hard,
}

/// Inclusive ranges for a difficulty's grid size and dot count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyBand {
    /// Side length of the square grid.
    pub grid_size: RangeInclusive<u8>,
    /// Number of dots the generator aims to place.
    pub dot_count: RangeInclusive<u8>,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the generation band for this difficulty.
    ///
    /// # Examples
    ///
    /// ```
    /// use centrd_core::Difficulty;
    ///
    /// let band = Difficulty::Medium.band();
    /// assert_eq!(band.grid_size, 8..=12);
    /// assert_eq!(band.dot_count, 5..=7);
    /// ```
    #[must_use]
    pub fn band(self) -> DifficultyBand {
        match self {
            Self::Easy => DifficultyBand {
                grid_size: 5..=7,
                dot_count: 3..=4,
            },
            Self::Medium => DifficultyBand {
                grid_size: 8..=12,
                dot_count: 5..=7,
            },
            Self::Hard => DifficultyBand {
                grid_size: 13..=20,
                dot_count: 8..=12,
            },
        }
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {_0:?}")]
pub struct ParseDifficultyError(#[error(not(source))] String);

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError(s.to_owned()))
    }
}
