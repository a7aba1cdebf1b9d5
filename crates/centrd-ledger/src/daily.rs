use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The result of one completed daily challenge.
///
/// Serialized with camelCase keys:
/// `{ "date", "totalScore", "averageScore", "perfectCount", "completed" }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    /// The challenge date.
    pub date: NaiveDate,
    /// Sum of the puzzle scores.
    pub total_score: f64,
    /// `total_score` divided by the number of puzzles.
    pub average_score: f64,
    /// Number of puzzles scored exactly zero.
    pub perfect_count: u32,
    /// Whether every puzzle of the day was played.
    pub completed: bool,
}

/// Daily results keyed by date, with the streak derived from them.
///
/// The streak is never set directly. It is recomputed from the records every
/// time one is added, so it always agrees with the history.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyLedger {
    #[serde(default)]
    scores: BTreeMap<NaiveDate, DailyRecord>,
    #[serde(default)]
    current_streak: u32,
}

impl DailyLedger {
    /// Returns the record for `date`.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.scores.get(&date)
    }

    /// Returns `true` if the challenge for `date` has been completed.
    #[must_use]
    pub fn is_completed(&self, date: NaiveDate) -> bool {
        self.get(date).is_some_and(|record| record.completed)
    }

    /// Returns every record, oldest first.
    pub fn records(&self) -> impl Iterator<Item = &DailyRecord> {
        self.scores.values()
    }

    /// Returns the streak as of the last recomputation.
    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Inserts or replaces the record for `record.date` and recomputes the
    /// streak as of `today`.
    ///
    /// Returns the new streak.
    pub fn record(&mut self, record: DailyRecord, today: NaiveDate) -> u32 {
        self.scores.insert(record.date, record);
        self.refresh_streak(today)
    }

    /// Recomputes the streak as of `today` and returns it.
    pub fn refresh_streak(&mut self, today: NaiveDate) -> u32 {
        self.current_streak = self.streak_ending(today);
        self.current_streak
    }

    /// Counts consecutive completed days walking back from `today`.
    ///
    /// Stops at the first day without a completed record. A day completed out
    /// of order only counts once every day between it and `today` is complete.
    #[must_use]
    pub fn streak_ending(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = Some(today);
        while let Some(d) = day
            && self.is_completed(d)
        {
            streak += 1;
            day = d.pred_opt();
        }
        streak
    }
}
