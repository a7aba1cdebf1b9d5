use centrd_core::{Difficulty, DistanceMetric, Position, Puzzle};
use chrono::NaiveDate;

/// Returns every optimal cell of a puzzle, in scan order.
///
/// # Panics
///
/// Panics if `dots` is empty or `grid_size` is zero.
///
/// # Examples
///
/// ```
/// use centrd_core::{DistanceMetric, Position};
///
/// let dots = [Position::new(0, 0), Position::new(2, 0), Position::new(1, 2)];
/// let optimal = centrd_game::solve(3, &dots, DistanceMetric::Chebyshev);
/// assert_eq!(optimal[0], Position::new(1, 1));
/// ```
#[must_use]
pub fn solve(grid_size: u8, dots: &[Position], metric: DistanceMetric) -> Vec<Position> {
    centrd_solver::find_optimal_points(grid_size, dots, metric).into_points()
}

/// Generates `count` free-play puzzles.
#[must_use]
pub fn new_free_puzzles(difficulty: Difficulty, count: usize) -> Vec<Puzzle> {
    centrd_generator::generate_free_puzzles(difficulty, count)
}

/// Generates the six daily puzzles for `date`.
#[must_use]
pub fn new_daily_puzzles(date: NaiveDate) -> Vec<Puzzle> {
    centrd_generator::generate_daily_puzzles(date)
}
