use centrd_core::{Difficulty, DistanceMetric, Position};
use centrd_generator::{PuzzleGenerator, PuzzleSeed};
use centrd_ledger::{Clock, DailyRecord, ScoreLedger, Store};
use chrono::NaiveDate;

use crate::{
    GameMode, GameSession, IgnoreReason, NoopTelemetry, RunSummary, SessionEvent, Telemetry,
    TelemetryEvent, TutorialOutcome, TutorialStep, Transition, is_streak_milestone,
};

/// Why a run could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum StartBlockReason {
    /// Today's daily challenge is already completed.
    #[display("the daily challenge for {date} is already completed")]
    DailyAlreadyCompleted {
        /// The challenge date.
        #[error(not(source))]
        date: NaiveDate,
    },
}

/// One live session plus the persisted ledger and telemetry sink.
///
/// The engine is the only writer of the ledger. Every run it starts replaces
/// the previous session; finished runs are recorded as soon as the last
/// reveal is acknowledged. Storage and telemetry failures are logged and
/// otherwise ignored so the game stays playable.
pub struct GameEngine<S> {
    ledger: ScoreLedger<S>,
    telemetry: Box<dyn Telemetry>,
    metric: DistanceMetric,
    session: Option<GameSession>,
}

impl<S> std::fmt::Debug for GameEngine<S>
where
    S: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("ledger", &self.ledger)
            .field("metric", &self.metric)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl<S> GameEngine<S>
where
    S: Store,
{
    /// Loads the ledger from `store` and creates an engine without telemetry.
    #[must_use]
    pub fn new<C>(store: S, clock: C) -> Self
    where
        C: Clock + 'static,
    {
        Self::from_ledger(ScoreLedger::load(store, clock))
    }

    /// Creates an engine over an already loaded ledger.
    #[must_use]
    pub fn from_ledger(ledger: ScoreLedger<S>) -> Self {
        Self {
            ledger,
            telemetry: Box::new(NoopTelemetry),
            metric: DistanceMetric::default(),
            session: None,
        }
    }

    /// Replaces the telemetry sink.
    #[must_use]
    pub fn with_telemetry<T>(mut self, telemetry: T) -> Self
    where
        T: Telemetry + 'static,
    {
        self.telemetry = Box::new(telemetry);
        self
    }

    /// Returns the score ledger.
    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger<S> {
        &self.ledger
    }

    /// Returns the live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    /// Returns the metric new sessions start with.
    #[must_use]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    /// Returns `true` if today's daily challenge can still be played.
    #[must_use]
    pub fn can_play_daily(&self) -> bool {
        !self.ledger.is_daily_completed(self.ledger.today())
    }

    /// Starts a zen run of `difficulty` with fresh puzzles.
    pub fn start_zen(&mut self, difficulty: Difficulty) -> &GameSession {
        self.start_zen_with(difficulty, &mut PuzzleGenerator::new())
    }

    /// Starts a zen run replaying the puzzles of `seed`.
    pub fn start_zen_seeded(&mut self, difficulty: Difficulty, seed: PuzzleSeed) -> &GameSession {
        self.start_zen_with(difficulty, &mut PuzzleGenerator::with_seed(seed))
    }

    fn start_zen_with(
        &mut self,
        difficulty: Difficulty,
        generator: &mut PuzzleGenerator,
    ) -> &GameSession {
        let session = GameSession::zen(difficulty, self.metric, generator);
        self.begin(session)
    }

    /// Starts today's daily challenge.
    ///
    /// # Errors
    ///
    /// Returns [`StartBlockReason::DailyAlreadyCompleted`] if today's challenge
    /// is already recorded as completed. The current session is left as is.
    pub fn start_daily(&mut self) -> Result<&GameSession, StartBlockReason> {
        let date = self.ledger.today();
        if self.ledger.is_daily_completed(date) {
            log::info!("daily challenge for {date} already completed");
            return Err(StartBlockReason::DailyAlreadyCompleted { date });
        }
        let session = GameSession::daily(date, self.metric);
        Ok(self.begin(session))
    }

    fn begin(&mut self, session: GameSession) -> &GameSession {
        let show_tutorial = !self.ledger.has_played();
        let session = session.with_tutorial(show_tutorial);
        let mode = session.mode();
        log::info!(
            "starting {mode} run with {} puzzles under {} distance",
            session.puzzles().len(),
            session.metric()
        );

        self.emit(TelemetryEvent::GameStarted {
            mode,
            difficulty: mode.is_zen().then(|| session.difficulty()),
        });
        if show_tutorial {
            self.emit(TelemetryEvent::TutorialInteraction(TutorialStep::Started));
        }
        if let Err(e) = self.ledger.mark_played() {
            log::warn!("failed to persist has-played flag: {e}");
        }

        self.session.insert(session)
    }

    /// Submits a guess for the current puzzle.
    pub fn guess(&mut self, pos: Position) -> Transition {
        self.handle(SessionEvent::Guess(pos))
    }

    /// Acknowledges the current reveal.
    pub fn advance(&mut self) -> Transition {
        self.handle(SessionEvent::Advance)
    }

    /// Closes the tutorial.
    pub fn close_tutorial(&mut self, outcome: TutorialOutcome) -> Transition {
        self.handle(SessionEvent::CloseTutorial(outcome))
    }

    /// Changes the distance metric for the live session and every later one.
    pub fn set_metric(&mut self, metric: DistanceMetric) -> Transition {
        self.metric = metric;
        match &mut self.session {
            Some(session) => session.set_metric(metric),
            None => Transition::MetricChanged(metric),
        }
    }

    /// Applies one event to the live session and reacts to the outcome.
    pub fn handle(&mut self, event: SessionEvent) -> Transition {
        if let SessionEvent::SetMetric(metric) = event {
            return self.set_metric(metric);
        }
        let Some(session) = &mut self.session else {
            return Transition::Ignored(IgnoreReason::NoSession);
        };
        let mode = session.mode();
        let transition = session.handle(event);

        match &transition {
            Transition::Scored { index, reveal } => {
                let perfect = reveal.is_perfect();
                self.emit(TelemetryEvent::PuzzleCompleted {
                    mode,
                    index: *index,
                    score: reveal.score,
                    perfect,
                });
                if perfect {
                    self.emit(TelemetryEvent::PerfectScore {
                        mode,
                        index: *index,
                    });
                }
            }
            Transition::Completed(summary) => self.finish(summary),
            Transition::TutorialClosed(outcome) => {
                self.emit(TelemetryEvent::TutorialInteraction((*outcome).into()));
                if let Err(e) = self.ledger.mark_played() {
                    log::warn!("failed to persist has-played flag: {e}");
                }
            }
            Transition::Advanced { .. }
            | Transition::MetricChanged(_)
            | Transition::Ignored(_) => {}
        }

        transition
    }

    fn finish(&mut self, summary: &RunSummary) {
        let streak = match summary.mode {
            GameMode::Zen => {
                if let Err(e) = self.ledger.record_run(summary.difficulty, summary.average_score) {
                    log::warn!("failed to persist high scores: {e}");
                }
                None
            }
            GameMode::Daily(date) => {
                let record = DailyRecord {
                    date,
                    total_score: summary.total_score,
                    average_score: summary.average_score,
                    perfect_count: summary.perfect_count,
                    completed: true,
                };
                if let Err(e) = self.ledger.record_daily(record) {
                    log::warn!("failed to persist daily record: {e}");
                }
                Some(self.ledger.streak())
            }
        };

        self.emit(TelemetryEvent::GameCompleted {
            mode: summary.mode,
            total_score: summary.total_score,
            average_score: summary.average_score,
            perfect_count: summary.perfect_count,
            difficulty: summary.mode.is_zen().then_some(summary.difficulty),
            streak,
        });
        if let Some(streak) = streak
            && is_streak_milestone(streak)
        {
            self.emit(TelemetryEvent::StreakMilestone { streak });
        }
    }

    fn emit(&mut self, event: TelemetryEvent) {
        if let Err(e) = self.telemetry.track(&event) {
            log::warn!("dropping telemetry event {}: {e}", event.name());
        }
    }
}
