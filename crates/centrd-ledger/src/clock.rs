use chrono::{NaiveDate, Utc};

/// Source of the current calendar date.
///
/// Streaks count consecutive days ending *today*, so the ledger needs to know
/// what today is. Injecting it keeps the ledger testable.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// The system clock, in UTC.
///
/// Days roll over at midnight UTC for every player, so everyone shares the
/// same daily challenge.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Creates a clock that always reports `date`.
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
