use centrd_core::Difficulty;
use chrono::NaiveDate;
use serde::{Serialize, de::DeserializeOwned};

use crate::{Clock, DailyLedger, DailyRecord, HighScores, LedgerError, Store};

/// Store key of the daily ledger document.
pub const DAILY_LEDGER_KEY: &str = "daily-ledger";
/// Store key of the high-score document.
pub const HIGH_SCORES_KEY: &str = "high-scores";
/// Store key of the tutorial flag.
pub const HAS_PLAYED_KEY: &str = "has-played";

/// All persisted score state, loaded once and written back on every change.
///
/// Mutations update the in-memory copy first and then write the whole
/// document. A failed write is reported to the caller but never rolls back
/// the in-memory state.
pub struct ScoreLedger<S> {
    store: S,
    clock: Box<dyn Clock>,
    high_scores: HighScores,
    daily: DailyLedger,
    has_played: bool,
}

impl<S> std::fmt::Debug for ScoreLedger<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreLedger")
            .field("store", &self.store)
            .field("high_scores", &self.high_scores)
            .field("daily", &self.daily)
            .field("has_played", &self.has_played)
            .finish_non_exhaustive()
    }
}

impl<S> ScoreLedger<S>
where
    S: Store,
{
    /// Loads every document from `store`.
    ///
    /// Missing or unreadable documents fall back to their defaults. The streak
    /// is recomputed against `clock` so a stale value from a previous day is
    /// never reported.
    #[must_use]
    pub fn load<C>(store: S, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        let mut high_scores: HighScores = load_document(&store, HIGH_SCORES_KEY);
        high_scores.normalize();
        let mut daily: DailyLedger = load_document(&store, DAILY_LEDGER_KEY);
        daily.refresh_streak(clock.today());
        let has_played = load_document(&store, HAS_PLAYED_KEY);

        Self {
            store,
            clock: Box::new(clock),
            high_scores,
            daily,
            has_played,
        }
    }

    /// Returns today's date according to the ledger's clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Returns the backing store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Records the average score of a finished zen run.
    ///
    /// # Errors
    ///
    /// Returns an error if the high scores could not be written back.
    pub fn record_run(&mut self, difficulty: Difficulty, average_score: f64) -> Result<(), LedgerError> {
        let kept = self.high_scores.insert(difficulty, average_score);
        log::info!("recorded {difficulty} run averaging {average_score:.3} (high score: {kept})");
        save_document(&mut self.store, HIGH_SCORES_KEY, &self.high_scores)
    }

    /// Records a daily result and recomputes the streak as of today.
    ///
    /// # Errors
    ///
    /// Returns an error if the daily ledger could not be written back.
    pub fn record_daily(&mut self, record: DailyRecord) -> Result<(), LedgerError> {
        let date = record.date;
        let streak = self.daily.record(record, self.clock.today());
        log::info!("recorded daily challenge for {date}, streak is now {streak}");
        save_document(&mut self.store, DAILY_LEDGER_KEY, &self.daily)
    }

    /// Returns the best zen average for `difficulty`.
    #[must_use]
    pub fn best_for(&self, difficulty: Difficulty) -> Option<f64> {
        self.high_scores.best(difficulty)
    }

    /// Returns the top zen averages for `difficulty`, best first.
    #[must_use]
    pub fn top_n_for(&self, difficulty: Difficulty) -> &[f64] {
        self.high_scores.scores(difficulty)
    }

    /// Returns the current daily streak.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.daily.current_streak()
    }

    /// Returns `true` if the daily challenge for `date` is already completed.
    #[must_use]
    pub fn is_daily_completed(&self, date: NaiveDate) -> bool {
        self.daily.is_completed(date)
    }

    /// Returns the daily record for `date`.
    #[must_use]
    pub fn daily_record(&self, date: NaiveDate) -> Option<&DailyRecord> {
        self.daily.get(date)
    }

    /// Returns the whole daily ledger.
    #[must_use]
    pub fn daily(&self) -> &DailyLedger {
        &self.daily
    }

    /// Returns `true` once the player has seen the tutorial or started a run.
    #[must_use]
    pub fn has_played(&self) -> bool {
        self.has_played
    }

    /// Sets the has-played flag. Writes only on the first call.
    ///
    /// # Errors
    ///
    /// Returns an error if the flag could not be written back.
    pub fn mark_played(&mut self) -> Result<(), LedgerError> {
        if self.has_played {
            return Ok(());
        }
        self.has_played = true;
        save_document(&mut self.store, HAS_PLAYED_KEY, &true)
    }
}

fn load_document<S, T>(store: &S, key: &str) -> T
where
    S: Store + ?Sized,
    T: DeserializeOwned + Default,
{
    let contents = match store.load(key) {
        Ok(Some(contents)) => contents,
        Ok(None) => return T::default(),
        Err(e) => {
            log::warn!("failed to read {key}, starting fresh: {e}");
            return T::default();
        }
    };
    serde_json::from_str(&contents).unwrap_or_else(|e| {
        log::warn!("ignoring malformed {key}: {e}");
        T::default()
    })
}

fn save_document<S, T>(store: &mut S, key: &str, value: &T) -> Result<(), LedgerError>
where
    S: Store + ?Sized,
    T: Serialize + ?Sized,
{
    let contents = serde_json::to_string(value)?;
    store.save(key, &contents)?;
    Ok(())
}
