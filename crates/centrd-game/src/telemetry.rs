use centrd_core::Difficulty;

use crate::{GameMode, TutorialOutcome};

/// A lifecycle event reported to the telemetry collaborator.
#[derive(Debug, Clone, PartialEq, derive_more::IsVariant)]
pub enum TelemetryEvent {
    /// A run started.
    GameStarted {
        /// Mode of the run.
        mode: GameMode,
        /// Difficulty of a zen run; daily runs have a fixed mix.
        difficulty: Option<Difficulty>,
    },
    /// A guess was scored.
    PuzzleCompleted {
        /// Mode of the run.
        mode: GameMode,
        /// Index of the puzzle within the run.
        index: usize,
        /// Score of the guess.
        score: f64,
        /// Whether the score was exactly zero.
        perfect: bool,
    },
    /// A guess landed exactly on the answer.
    PerfectScore {
        /// Mode of the run.
        mode: GameMode,
        /// Index of the puzzle within the run.
        index: usize,
    },
    /// A run finished.
    GameCompleted {
        /// Mode of the run.
        mode: GameMode,
        /// Sum of all scores.
        total_score: f64,
        /// Average score per puzzle.
        average_score: f64,
        /// Number of perfect guesses.
        perfect_count: u32,
        /// Difficulty of a zen run.
        difficulty: Option<Difficulty>,
        /// Daily streak after a daily run.
        streak: Option<u32>,
    },
    /// The daily streak reached a milestone; see [`is_streak_milestone`].
    StreakMilestone {
        /// The new streak length.
        streak: u32,
    },
    /// The player interacted with the tutorial.
    TutorialInteraction(TutorialStep),
}

/// Tutorial interactions reported to telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum TutorialStep {
    /// The tutorial was shown.
    #[display("started")]
    Started,
    /// The tutorial was walked through to the end.
    #[display("completed")]
    Completed,
    /// The tutorial was dismissed early.
    #[display("skipped")]
    Skipped,
}

impl From<TutorialOutcome> for TutorialStep {
    fn from(outcome: TutorialOutcome) -> Self {
        match outcome {
            TutorialOutcome::Completed => Self::Completed,
            TutorialOutcome::Skipped => Self::Skipped,
        }
    }
}

impl TelemetryEvent {
    /// Returns the wire name of the event.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::GameStarted { .. } => "game_started",
            Self::PuzzleCompleted { .. } => "puzzle_completed",
            Self::PerfectScore { .. } => "perfect_score",
            Self::GameCompleted { .. } => "game_completed",
            Self::StreakMilestone { .. } => "streak_milestone",
            Self::TutorialInteraction(_) => "tutorial_interaction",
        }
    }
}

/// Returns `true` if reaching `streak` is worth reporting.
///
/// Milestones are the first, third and seventh day, and every fifth day.
///
/// # Examples
///
/// ```
/// use centrd_game::is_streak_milestone;
///
/// let milestones: Vec<u32> = (0..=15).filter(|&s| is_streak_milestone(s)).collect();
/// assert_eq!(milestones, [1, 3, 5, 7, 10, 15]);
/// ```
#[must_use]
pub fn is_streak_milestone(streak: u32) -> bool {
    matches!(streak, 1 | 3 | 7) || (streak > 0 && streak % 5 == 0)
}

/// Error returned by a [`Telemetry`] sink that failed to deliver an event.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("telemetry delivery failed: {message}")]
pub struct TelemetryError {
    #[error(not(source))]
    message: String,
}

impl TelemetryError {
    /// Creates an error with a human-readable message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// A fire-and-forget sink for [`TelemetryEvent`]s.
///
/// Failures are reported back so the caller can log them; they never affect
/// the game.
pub trait Telemetry {
    /// Delivers one event.
    ///
    /// # Errors
    ///
    /// Returns an error if the event could not be delivered.
    fn track(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError>;
}

/// Drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetry;

impl Telemetry for NoopTelemetry {
    fn track(&mut self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Writes every event to the `log` facade under the `centrd::telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTelemetry;

impl Telemetry for LogTelemetry {
    fn track(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        match event {
            TelemetryEvent::GameStarted { mode, difficulty } => {
                log::info!(target: "centrd::telemetry", "game_started mode={mode} difficulty={difficulty:?}");
            }
            TelemetryEvent::PuzzleCompleted {
                mode,
                index,
                score,
                perfect,
            } => {
                log::info!(
                    target: "centrd::telemetry",
                    "puzzle_completed mode={mode} index={index} score={score} perfect={perfect}"
                );
            }
            TelemetryEvent::PerfectScore { mode, index } => {
                log::info!(target: "centrd::telemetry", "perfect_score mode={mode} index={index}");
            }
            TelemetryEvent::GameCompleted {
                mode,
                total_score,
                average_score,
                perfect_count,
                difficulty,
                streak,
            } => {
                log::info!(
                    target: "centrd::telemetry",
                    "game_completed mode={mode} total={total_score} average={average_score} perfect={perfect_count} difficulty={difficulty:?} streak={streak:?}"
                );
            }
            TelemetryEvent::StreakMilestone { streak } => {
                log::info!(target: "centrd::telemetry", "streak_milestone streak={streak}");
            }
            TelemetryEvent::TutorialInteraction(step) => {
                log::info!(target: "centrd::telemetry", "tutorial_interaction step={step}");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_streak_milestones() {
        for streak in [1, 3, 5, 7, 10, 15, 20, 100] {
            assert!(is_streak_milestone(streak), "{streak}");
        }
        for streak in [0, 2, 4, 6, 8, 9, 11, 14] {
            assert!(!is_streak_milestone(streak), "{streak}");
        }
    }

    #[test]
    fn test_event_names() {
        assert_eq!(
            TelemetryEvent::StreakMilestone { streak: 3 }.name(),
            "streak_milestone"
        );
        assert_eq!(
            TelemetryEvent::TutorialInteraction(TutorialOutcome::Skipped.into()).name(),
            "tutorial_interaction"
        );
    }

    #[test]
    fn test_builtin_sinks_accept_everything() {
        let event = TelemetryEvent::GameStarted {
            mode: GameMode::Zen,
            difficulty: Some(Difficulty::Medium),
        };
        assert_eq!(NoopTelemetry.track(&event), Ok(()));
        assert_eq!(LogTelemetry.track(&event), Ok(()));
    }
}
