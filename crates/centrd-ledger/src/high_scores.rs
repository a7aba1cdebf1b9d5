use centrd_core::Difficulty;
use serde::{Deserialize, Serialize};

/// Number of scores kept per difficulty.
pub const MAX_HIGH_SCORES: usize = 10;

/// The best zen averages per difficulty, lowest (best) first.
///
/// Serialized as `{ "easy": [..], "medium": [..], "hard": [..] }`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighScores {
    easy: Vec<f64>,
    medium: Vec<f64>,
    hard: Vec<f64>,
}

impl HighScores {
    /// Returns the scores for `difficulty`, ascending.
    #[must_use]
    pub fn scores(&self, difficulty: Difficulty) -> &[f64] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn scores_mut(&mut self, difficulty: Difficulty) -> &mut Vec<f64> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Returns the best score for `difficulty`.
    #[must_use]
    pub fn best(&self, difficulty: Difficulty) -> Option<f64> {
        self.scores(difficulty).first().copied()
    }

    /// Inserts a score, keeping the list sorted and at most [`MAX_HIGH_SCORES`] long.
    ///
    /// Returns `true` if the score made the list.
    pub fn insert(&mut self, difficulty: Difficulty, score: f64) -> bool {
        let scores = self.scores_mut(difficulty);
        scores.push(score);
        scores.sort_by(f64::total_cmp);
        scores.truncate(MAX_HIGH_SCORES);
        scores.iter().any(|s| s.total_cmp(&score).is_eq())
    }

    /// Restores the sorted and bounded shape after loading foreign data.
    pub(crate) fn normalize(&mut self) {
        for difficulty in Difficulty::ALL {
            let scores = self.scores_mut(difficulty);
            scores.retain(|s| s.is_finite() && *s >= 0.0);
            scores.sort_by(f64::total_cmp);
            scores.truncate(MAX_HIGH_SCORES);
        }
    }
}
