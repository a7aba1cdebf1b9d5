//! Puzzles and their reveal state.

use crate::Position;

/// Minimum Chebyshev distance between any two dots of a puzzle.
///
/// Dots closer than this would touch and read as a single blob on the board.
pub const MIN_DOT_SPACING: u8 = 2;

/// The outcome of a guess on one puzzle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    /// The cell the player picked.
    pub user_guess: Position,
    /// The canonical optimal cell shown to the player.
    pub correct_answer: Position,
    /// Distance from `user_guess` to `correct_answer` under the session metric.
    pub score: f64,
}

impl Reveal {
    /// Returns `true` if the guess landed exactly on the revealed answer.
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.score == 0.0
    }
}

/// A single puzzle: a square grid and the dots placed on it.
///
/// The reveal (guess, answer, score) is written at most once; see
/// [`Puzzle::record_reveal`].
#[derive(Debug, Clone, PartialEq)]
pub struct Puzzle {
    id: String,
    grid_size: u8,
    dots: Vec<Position>,
    reveal: Option<Reveal>,
}

impl Puzzle {
    /// Creates an unrevealed puzzle.
    ///
    /// # Panics
    ///
    /// Panics if any dot lies outside the `grid_size` × `grid_size` grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use centrd_core::{Position, Puzzle};
    ///
    /// let puzzle = Puzzle::new("demo", 3, vec![Position::new(0, 0), Position::new(2, 2)]);
    /// assert_eq!(puzzle.grid_size(), 3);
    /// assert!(puzzle.reveal().is_none());
    /// ```
    #[must_use]
    pub fn new(id: impl Into<String>, grid_size: u8, dots: Vec<Position>) -> Self {
        assert!(
            dots.iter().all(|dot| dot.is_within(grid_size)),
            "dot outside of {grid_size}x{grid_size} grid"
        );
        Self {
            id: id.into(),
            grid_size,
            dots,
            reveal: None,
        }
    }

    /// Returns the puzzle identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn grid_size(&self) -> u8 {
        self.grid_size
    }

    /// Returns the dots in placement order.
    #[must_use]
    pub fn dots(&self) -> &[Position] {
        &self.dots
    }

    /// Returns the reveal, if a guess has been recorded.
    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// Returns the recorded guess.
    #[must_use]
    pub fn user_guess(&self) -> Option<Position> {
        self.reveal.map(|r| r.user_guess)
    }

    /// Returns the revealed answer.
    #[must_use]
    pub fn correct_answer(&self) -> Option<Position> {
        self.reveal.map(|r| r.correct_answer)
    }

    /// Returns the recorded score.
    #[must_use]
    pub fn score(&self) -> Option<f64> {
        self.reveal.map(|r| r.score)
    }

    /// Returns `true` once a guess has been recorded.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.reveal.is_some()
    }

    /// Records the reveal for this puzzle.
    ///
    /// Returns `false` and leaves the puzzle untouched if a reveal already exists.
    pub fn record_reveal(&mut self, reveal: Reveal) -> bool {
        if self.reveal.is_some() {
            return false;
        }
        self.reveal = Some(reveal);
        true
    }

    /// Returns `true` if every pair of dots is at least [`MIN_DOT_SPACING`] apart
    /// in Chebyshev distance.
    #[must_use]
    pub fn has_spaced_dots(&self) -> bool {
        self.dots.iter().enumerate().all(|(i, a)| {
            self.dots[i + 1..].iter().all(|b| {
                let (dx, dy) = a.abs_diff(*b);
                dx.max(dy) >= MIN_DOT_SPACING
            })
        })
    }
}
