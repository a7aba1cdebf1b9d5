//! Core data structures for the centrd puzzle engine.
//!
//! A centrd puzzle is a square grid with a handful of marked dots. The player
//! picks the cell that minimizes the total distance to every dot and is scored
//! by how far that guess lands from the true optimum.
//!
//! # Overview
//!
//! - [`position`]: grid cell coordinates ([`Position`])
//! - [`metric`]: distance functions between cells ([`DistanceMetric`])
//! - [`difficulty`]: difficulty bands controlling grid size and dot count
//! - [`puzzle`]: a generated puzzle and its write-once reveal
//!
//! # Examples
//!
//! ```
//! use centrd_core::{DistanceMetric, Position};
//!
//! let a = Position::new(0, 0);
//! let b = Position::new(3, 4);
//!
//! assert_eq!(DistanceMetric::Euclidean.distance(a, b), 5.0);
//! assert_eq!(DistanceMetric::Manhattan.distance(a, b), 7.0);
//! assert_eq!(DistanceMetric::Chebyshev.distance(a, b), 4.0);
//! ```

pub mod difficulty;
pub mod metric;
pub mod position;
pub mod puzzle;

pub use self::{
    difficulty::{Difficulty, DifficultyBand},
    metric::DistanceMetric,
    position::Position,
    puzzle::{MIN_DOT_SPACING, Puzzle, Reveal},
};
