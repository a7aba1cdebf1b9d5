use std::ops::RangeInclusive;

use rand::distr::{Distribution as _, StandardUniform};
use rand_pcg::Pcg64;

/// A source of uniform draws in `[0, 1)`.
///
/// Puzzle generation consumes draws in a fixed order, so any two sources
/// producing the same sequence produce the same puzzles.
pub trait UnitSource {
    /// Returns the next draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Draws an integer uniformly from `range` as `start + floor(unit · len)`.
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn draw_in(&mut self, range: RangeInclusive<u8>) -> u8 {
        let (start, end) = range.into_inner();
        assert!(start <= end, "cannot draw from an empty range");
        let span = f64::from(end - start) + 1.0;
        let offset = (self.next_unit() * span).floor() as u8;
        start.saturating_add(offset).min(end)
    }
}

/// Non-deterministic draws for free play, backed by a seeded [`Pcg64`].
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: Pcg64,
}

impl EntropySource {
    /// Wraps an already seeded generator.
    #[must_use]
    pub fn new(rng: Pcg64) -> Self {
        Self { rng }
    }
}

impl UnitSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        StandardUniform.sample(&mut self.rng)
    }
}
