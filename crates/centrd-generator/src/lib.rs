//! Puzzle generation for centrd.
//!
//! Two entry points share one placement routine and differ only in where
//! their randomness comes from:
//!
//! - Free play ([`PuzzleGenerator`]) draws from a [`Pcg64`] stream seeded by a
//!   [`PuzzleSeed`], fresh from OS entropy unless one is supplied.
//! - The daily challenge ([`generate_daily_puzzles`]) draws from
//!   [`DateSeededRandom`], a linear-congruential generator seeded from the
//!   calendar date. The same date always yields bit-identical puzzles.
//!
//! # Examples
//!
//! ```
//! use centrd_core::Difficulty;
//! use centrd_generator::{PuzzleGenerator, PuzzleSeed};
//!
//! let seed = PuzzleSeed::from_phrase("hello");
//! let mut generator = PuzzleGenerator::with_seed(seed);
//! let puzzle = generator.generate(Difficulty::Easy);
//!
//! assert!((5..=7).contains(&puzzle.grid_size()));
//! assert!(puzzle.has_spaced_dots());
//! ```
//!
//! [`Pcg64`]: rand_pcg::Pcg64

pub use self::{daily::*, generator::*, seed::*, source::*};

mod daily;
mod generator;
mod seed;
mod source;
