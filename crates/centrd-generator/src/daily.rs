use centrd_core::{Difficulty, Puzzle};
use chrono::{Datelike as _, NaiveDate};

use crate::{UnitSource, generate_puzzle};

/// Difficulties of the daily set, in generation order.
pub const DAILY_DIFFICULTIES: [Difficulty; 6] = [
    Difficulty::Easy,
    Difficulty::Easy,
    Difficulty::Medium,
    Difficulty::Medium,
    Difficulty::Hard,
    Difficulty::Hard,
];

const LCG_MULTIPLIER: u64 = 1_664_525;
const LCG_INCREMENT: u64 = 1_013_904_223;
const LCG_MODULUS: u64 = 2_147_483_647;

/// Deterministic draws for the daily challenge.
///
/// A linear-congruential generator:
/// `state = (state · 1664525 + 1013904223) mod 2147483647`, yielding
/// `state / 2147483647`. Every player sees the same daily puzzles only as
/// long as this recurrence and its seed stay bit-for-bit unchanged.
///
/// # Examples
///
/// ```
/// use centrd_generator::{DateSeededRandom, UnitSource as _};
///
/// let mut a = DateSeededRandom::new(42);
/// let mut b = DateSeededRandom::new(42);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSeededRandom {
    state: u64,
}

impl DateSeededRandom {
    /// Creates a generator from a raw seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Creates the generator for a calendar date.
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self::new(date_seed(date))
    }
}

impl UnitSource for DateSeededRandom {
    #[expect(clippy::cast_precision_loss)]
    fn next_unit(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT)
            % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }
}

/// Folds a date into its daily seed.
///
/// The ISO form `YYYY-MM-DD` is read as three numbers and combined as
/// `(year · 31 + month) · 31 + day`.
#[must_use]
pub fn date_seed(date: NaiveDate) -> u64 {
    let (_, year) = date.year_ce();
    [year, date.month(), date.day()]
        .into_iter()
        .fold(0, |hash, part| hash * 31 + u64::from(part))
}

/// Folds an ISO date string into its daily seed.
///
/// Each `-`-separated field is parsed as a decimal number, so `"2024-1-7"`
/// and `"2024-01-07"` produce the same seed. Returns `None` if a field is not
/// a number.
///
/// # Examples
///
/// ```
/// use centrd_generator::date_seed_from_iso;
///
/// assert_eq!(date_seed_from_iso("2024-01-15"), Some(1_945_110));
/// assert_eq!(date_seed_from_iso("2024-1-15"), Some(1_945_110));
/// assert_eq!(date_seed_from_iso("not-a-date"), None);
/// ```
#[must_use]
pub fn date_seed_from_iso(date: &str) -> Option<u64> {
    date.split('-').try_fold(0u64, |hash, part| {
        let part: u64 = part.parse().ok()?;
        hash.checked_mul(31)?.checked_add(part)
    })
}

/// Generates the six daily puzzles for `date`.
///
/// All six are drawn from one running [`DateSeededRandom`] in
/// [`DAILY_DIFFICULTIES`] order. The result depends on `date` alone.
#[must_use]
pub fn generate_daily_puzzles(date: NaiveDate) -> Vec<Puzzle> {
    let mut source = DateSeededRandom::for_date(date);
    log::debug!("generating daily puzzles for {date} (seed {})", date_seed(date));
    DAILY_DIFFICULTIES
        .into_iter()
        .map(|difficulty| generate_puzzle(difficulty, &mut source, "daily-"))
        .collect()
}
