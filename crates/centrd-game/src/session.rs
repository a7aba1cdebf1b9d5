use centrd_core::{Difficulty, DistanceMetric, Position, Puzzle, Reveal};
use centrd_generator::{PuzzleGenerator, generate_daily_puzzles};
use chrono::NaiveDate;

/// Number of puzzles in a zen run.
pub const ZEN_PUZZLE_COUNT: usize = 5;

/// The kind of run being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, derive_more::IsVariant)]
pub enum GameMode {
    /// Free play: fresh random puzzles of one difficulty.
    #[display("zen")]
    Zen,
    /// The daily challenge for the given date.
    #[display("daily")]
    Daily(NaiveDate),
}

impl GameMode {
    /// Returns the challenge date of a daily run.
    #[must_use]
    pub fn daily_date(self) -> Option<NaiveDate> {
        match self {
            Self::Zen => None,
            Self::Daily(date) => Some(date),
        }
    }
}

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum Phase {
    /// The tutorial is open; guesses are blocked until it is closed.
    #[display("tutorial")]
    Tutorial,
    /// Waiting for a guess on the current puzzle.
    #[display("playing")]
    Playing,
    /// The current puzzle's answer is shown; waiting for the player to advance.
    #[display("revealing")]
    Revealing,
    /// Every puzzle has been guessed and acknowledged.
    #[display("complete")]
    Complete,
}

/// An input to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Submit a guess for the current puzzle.
    Guess(Position),
    /// Acknowledge the reveal and move to the next puzzle.
    Advance,
    /// Close the tutorial.
    CloseTutorial(TutorialOutcome),
    /// Change the distance metric used for later guesses.
    SetMetric(DistanceMetric),
}

/// How the player left the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum TutorialOutcome {
    /// Walked through to the end.
    #[display("completed")]
    Completed,
    /// Dismissed early.
    #[display("skipped")]
    Skipped,
}

/// Why an event left the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum IgnoreReason {
    /// No session is running.
    #[display("no session is running")]
    NoSession,
    /// The tutorial must be closed first.
    #[display("the tutorial is open")]
    TutorialOpen,
    /// The tutorial is not shown.
    #[display("the tutorial is not shown")]
    TutorialNotShown,
    /// The current puzzle already has a guess.
    #[display("the current puzzle was already guessed")]
    AlreadyGuessed,
    /// The guess lies outside the grid.
    #[display("the guess lies outside the grid")]
    OutOfGrid,
    /// The current puzzle has no guess yet.
    #[display("the current puzzle has not been guessed")]
    NotGuessed,
    /// The session is complete.
    #[display("the session is complete")]
    SessionComplete,
}

/// The result of applying a [`SessionEvent`].
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum Transition {
    /// A guess was scored and the answer is revealed.
    Scored {
        /// Index of the scored puzzle.
        index: usize,
        /// The recorded reveal.
        reveal: Reveal,
    },
    /// Moved on to the puzzle at `index`.
    Advanced {
        /// Index of the new current puzzle.
        index: usize,
    },
    /// The last reveal was acknowledged and the run is over.
    Completed(RunSummary),
    /// The tutorial was closed.
    TutorialClosed(TutorialOutcome),
    /// The distance metric changed.
    MetricChanged(DistanceMetric),
    /// The event was rejected and nothing changed.
    Ignored(IgnoreReason),
}

/// Totals of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Mode of the run.
    pub mode: GameMode,
    /// Difficulty the run was started with.
    pub difficulty: Difficulty,
    /// Sum of all puzzle scores.
    pub total_score: f64,
    /// `total_score` divided by the number of puzzles.
    pub average_score: f64,
    /// Number of puzzles scored exactly zero.
    pub perfect_count: u32,
    /// Per-puzzle scores in play order.
    pub scores: Vec<f64>,
}

/// One run of puzzles.
///
/// A session is created whole for each run and never reset. Reveals are
/// write-once: a second guess on the same puzzle is ignored, so the
/// `total_score` always equals the sum of the recorded puzzle scores.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    mode: GameMode,
    difficulty: Difficulty,
    metric: DistanceMetric,
    puzzles: Vec<Puzzle>,
    current: usize,
    total_score: f64,
    is_complete: bool,
    is_revealing: bool,
    show_tutorial: bool,
}

impl GameSession {
    /// Creates a session over the given puzzles.
    ///
    /// # Panics
    ///
    /// Panics if `puzzles` is empty.
    #[must_use]
    pub fn new(
        mode: GameMode,
        difficulty: Difficulty,
        metric: DistanceMetric,
        puzzles: Vec<Puzzle>,
    ) -> Self {
        assert!(!puzzles.is_empty(), "cannot start a session without puzzles");
        Self {
            mode,
            difficulty,
            metric,
            puzzles,
            current: 0,
            total_score: 0.0,
            is_complete: false,
            is_revealing: false,
            show_tutorial: false,
        }
    }

    /// Starts a run of `mode`.
    ///
    /// Zen runs draw [`ZEN_PUZZLE_COUNT`] fresh puzzles of `difficulty`. Daily
    /// runs ignore `difficulty` and use the fixed daily set for their date.
    #[must_use]
    pub fn start(mode: GameMode, difficulty: Difficulty, metric: DistanceMetric) -> Self {
        match mode {
            GameMode::Zen => Self::zen(difficulty, metric, &mut PuzzleGenerator::new()),
            GameMode::Daily(date) => Self::daily(date, metric),
        }
    }

    /// Starts a zen run drawing puzzles from `generator`.
    #[must_use]
    pub fn zen(
        difficulty: Difficulty,
        metric: DistanceMetric,
        generator: &mut PuzzleGenerator,
    ) -> Self {
        log::debug!("starting {difficulty} zen run with seed {}", generator.seed());
        let puzzles = generator.generate_many(difficulty, ZEN_PUZZLE_COUNT);
        Self::new(GameMode::Zen, difficulty, metric, puzzles)
    }

    /// Starts the daily run for `date`.
    #[must_use]
    pub fn daily(date: NaiveDate, metric: DistanceMetric) -> Self {
        Self::new(
            GameMode::Daily(date),
            Difficulty::default(),
            metric,
            generate_daily_puzzles(date),
        )
    }

    /// Sets whether the tutorial is shown before the first guess.
    #[must_use]
    pub fn with_tutorial(mut self, show: bool) -> Self {
        self.show_tutorial = show;
        self
    }

    /// Returns the mode of this run.
    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the difficulty this run was started with.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the metric used to score guesses.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Returns every puzzle of the run.
    #[must_use]
    pub fn puzzles(&self) -> &[Puzzle] {
        &self.puzzles
    }

    /// Returns the index of the current puzzle.
    ///
    /// Equals `puzzles().len()` once the session is complete.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the puzzle in play, or `None` once the session is complete.
    #[must_use]
    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.puzzles.get(self.current)
    }

    /// Returns the sum of all recorded scores.
    #[must_use]
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Returns `true` once the last reveal has been acknowledged.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Returns `true` while the current puzzle's answer is shown.
    #[must_use]
    pub fn is_revealing(&self) -> bool {
        self.is_revealing
    }

    /// Returns `true` while the tutorial is open.
    #[must_use]
    pub fn show_tutorial(&self) -> bool {
        self.show_tutorial
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.is_complete {
            Phase::Complete
        } else if self.show_tutorial {
            Phase::Tutorial
        } else if self.is_revealing {
            Phase::Revealing
        } else {
            Phase::Playing
        }
    }

    /// Returns the run totals once the session is complete.
    #[must_use]
    pub fn summary(&self) -> Option<RunSummary> {
        self.is_complete.then(|| self.build_summary())
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    fn build_summary(&self) -> RunSummary {
        let scores: Vec<f64> = self.puzzles.iter().filter_map(Puzzle::score).collect();
        let perfect_count = self
            .puzzles
            .iter()
            .filter_map(Puzzle::reveal)
            .filter(|reveal| reveal.is_perfect())
            .count() as u32;
        RunSummary {
            mode: self.mode,
            difficulty: self.difficulty,
            total_score: self.total_score,
            average_score: self.total_score / self.puzzles.len() as f64,
            perfect_count,
            scores,
        }
    }

    /// Applies one event.
    pub fn handle(&mut self, event: SessionEvent) -> Transition {
        match event {
            SessionEvent::Guess(pos) => self.guess(pos),
            SessionEvent::Advance => self.advance(),
            SessionEvent::CloseTutorial(outcome) => self.close_tutorial(outcome),
            SessionEvent::SetMetric(metric) => self.set_metric(metric),
        }
    }

    /// Checks whether a guess at `pos` would be accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`IgnoreReason`] the guess would be ignored with.
    pub fn guess_capability(&self, pos: Position) -> Result<(), IgnoreReason> {
        if self.is_complete {
            return Err(IgnoreReason::SessionComplete);
        }
        if self.show_tutorial {
            return Err(IgnoreReason::TutorialOpen);
        }
        let puzzle = self
            .current_puzzle()
            .ok_or(IgnoreReason::SessionComplete)?;
        if puzzle.is_revealed() {
            return Err(IgnoreReason::AlreadyGuessed);
        }
        if !pos.is_within(puzzle.grid_size()) {
            return Err(IgnoreReason::OutOfGrid);
        }
        Ok(())
    }

    /// Scores a guess on the current puzzle and reveals the answer.
    ///
    /// The answer is the first optimal cell in scan order and the score is the
    /// distance from `pos` to it under the session metric. Guessing a puzzle
    /// that already has a guess is ignored.
    pub fn guess(&mut self, pos: Position) -> Transition {
        if let Err(reason) = self.guess_capability(pos) {
            log::debug!("ignoring guess at {pos}: {reason}");
            return Transition::Ignored(reason);
        }

        let index = self.current;
        let metric = self.metric;
        let puzzle = &mut self.puzzles[index];
        let answer =
            centrd_solver::find_optimal_points(puzzle.grid_size(), puzzle.dots(), metric)
                .canonical();
        let reveal = Reveal {
            user_guess: pos,
            correct_answer: answer,
            score: metric.distance(pos, answer),
        };
        let recorded = puzzle.record_reveal(reveal);
        debug_assert!(recorded, "guess capability checked the puzzle is unrevealed");

        self.total_score += reveal.score;
        self.is_revealing = true;
        Transition::Scored { index, reveal }
    }

    /// Checks whether [`GameSession::advance`] would be accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`IgnoreReason`] the advance would be ignored with.
    pub fn advance_capability(&self) -> Result<(), IgnoreReason> {
        if self.is_complete {
            return Err(IgnoreReason::SessionComplete);
        }
        match self.current_puzzle() {
            Some(puzzle) if puzzle.is_revealed() => Ok(()),
            Some(_) => Err(IgnoreReason::NotGuessed),
            None => Err(IgnoreReason::SessionComplete),
        }
    }

    /// Acknowledges the current reveal.
    ///
    /// Moves to the next puzzle, or completes the session after the last one.
    /// Ignored unless the current puzzle has been guessed.
    pub fn advance(&mut self) -> Transition {
        if let Err(reason) = self.advance_capability() {
            log::debug!("ignoring advance: {reason}");
            return Transition::Ignored(reason);
        }

        self.current += 1;
        if self.current >= self.puzzles.len() {
            self.is_complete = true;
            let summary = self.build_summary();
            log::info!(
                "{} run complete: total {:.3}, average {:.3}, {} perfect",
                self.mode,
                summary.total_score,
                summary.average_score,
                summary.perfect_count,
            );
            return Transition::Completed(summary);
        }
        self.is_revealing = false;
        Transition::Advanced {
            index: self.current,
        }
    }

    /// Closes the tutorial. Once closed it stays closed for this session.
    pub fn close_tutorial(&mut self, outcome: TutorialOutcome) -> Transition {
        if !self.show_tutorial {
            return Transition::Ignored(IgnoreReason::TutorialNotShown);
        }
        self.show_tutorial = false;
        Transition::TutorialClosed(outcome)
    }

    /// Changes the metric used to score later guesses.
    ///
    /// Puzzles already guessed keep their recorded scores.
    pub fn set_metric(&mut self, metric: DistanceMetric) -> Transition {
        self.metric = metric;
        Transition::MetricChanged(metric)
    }
}
