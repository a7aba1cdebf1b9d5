//! Persisted scores for centrd.
//!
//! Three documents survive across runs, each stored as JSON under its own key
//! in a [`Store`]:
//!
//! - [`HIGH_SCORES_KEY`]: the ten best zen averages per difficulty
//! - [`DAILY_LEDGER_KEY`]: one [`DailyRecord`] per completed daily challenge,
//!   plus the current streak
//! - [`HAS_PLAYED_KEY`]: whether the tutorial has been seen
//!
//! [`ScoreLedger`] loads all three once, mutates them in memory and writes the
//! changed document back after every mutation. Unreadable documents fall back
//! to their defaults so the game stays playable.
//!
//! # Examples
//!
//! ```
//! use centrd_core::Difficulty;
//! use centrd_ledger::{FixedClock, MemoryStore, ScoreLedger};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
//! let mut ledger = ScoreLedger::load(MemoryStore::new(), FixedClock::new(today));
//!
//! ledger.record_run(Difficulty::Easy, 1.5)?;
//! ledger.record_run(Difficulty::Easy, 0.5)?;
//! assert_eq!(ledger.best_for(Difficulty::Easy), Some(0.5));
//! # Ok::<(), centrd_ledger::LedgerError>(())
//! ```

pub use self::{clock::*, daily::*, error::*, high_scores::*, ledger::*, store::*};

mod clock;
mod daily;
mod error;
mod high_scores;
mod ledger;
mod store;
