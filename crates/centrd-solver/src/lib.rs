//! Exhaustive geometric-median solver for centrd puzzles.
//!
//! Grids are at most 20×20 with at most 12 dots, so scanning every cell is
//! cheap and trivially correct. The solver returns every cell whose total
//! distance to the dots is minimal, in [`Position::scan`] order; the first
//! of them is the canonical answer revealed to the player.
//!
//! # Examples
//!
//! ```
//! use centrd_core::{DistanceMetric, Position};
//! use centrd_solver::find_optimal_points;
//!
//! let dots = [Position::new(0, 0), Position::new(2, 0), Position::new(1, 2)];
//! let optimal = find_optimal_points(3, &dots, DistanceMetric::Chebyshev);
//!
//! assert_eq!(optimal.canonical(), Position::new(1, 1));
//! assert_eq!(optimal.total_distance(), 3.0);
//! ```
//!
//! [`Position::scan`]: centrd_core::Position::scan

pub use self::median::*;

mod median;
#[cfg(test)]
mod testing;
