use std::{cell::RefCell, rc::Rc};

use centrd_core::{Difficulty, DistanceMetric, Position};
use centrd_game::{
    GameEngine, GameMode, IgnoreReason, StartBlockReason, Telemetry, TelemetryError,
    TelemetryEvent, Transition, TutorialOutcome, TutorialStep, solve,
};
use centrd_generator::PuzzleSeed;
use centrd_ledger::{
    DAILY_LEDGER_KEY, FixedClock, HIGH_SCORES_KEY, MemoryStore, Store, StoreError,
};
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[derive(Debug, Clone, Default)]
struct Recorder(Rc<RefCell<Vec<TelemetryEvent>>>);

impl Recorder {
    fn names(&self) -> Vec<&'static str> {
        self.0.borrow().iter().map(TelemetryEvent::name).collect()
    }

    fn events(&self) -> Vec<TelemetryEvent> {
        self.0.borrow().clone()
    }
}

impl Telemetry for Recorder {
    fn track(&mut self, event: &TelemetryEvent) -> Result<(), TelemetryError> {
        self.0.borrow_mut().push(event.clone());
        Ok(())
    }
}

struct Unreachable;

impl Telemetry for Unreachable {
    fn track(&mut self, _event: &TelemetryEvent) -> Result<(), TelemetryError> {
        Err(TelemetryError::new("collector unreachable"))
    }
}

#[derive(Debug, Default)]
struct BrokenStore;

impl Store for BrokenStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(std::io::Error::other("disk gone").into())
    }

    fn save(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(std::io::Error::other("disk gone").into())
    }
}

/// Guesses the revealed answer of the current puzzle.
fn perfect_guess<S: Store>(engine: &GameEngine<S>) -> Position {
    let session = engine.session().unwrap();
    let puzzle = session.current_puzzle().unwrap();
    solve(puzzle.grid_size(), puzzle.dots(), session.metric())[0]
}

fn play_out<S: Store>(
    engine: &mut GameEngine<S>,
    mut pick: impl FnMut(&GameEngine<S>) -> Position,
) -> Transition {
    loop {
        let guess = pick(&*engine);
        assert!(engine.guess(guess).is_scored());
        let transition = engine.advance();
        if !transition.is_advanced() {
            return transition;
        }
    }
}

#[test]
fn zen_run_records_high_score() {
    let telemetry = Recorder::default();
    let mut engine = GameEngine::new(MemoryStore::new(), FixedClock::new(date("2024-01-15")))
        .with_telemetry(telemetry.clone());

    let session = engine.start_zen_seeded(Difficulty::Medium, PuzzleSeed::from_phrase("zen"));
    assert!(session.show_tutorial());
    assert_eq!(
        engine.guess(Position::new(0, 0)),
        Transition::Ignored(IgnoreReason::TutorialOpen)
    );
    assert!(engine.close_tutorial(TutorialOutcome::Skipped).is_tutorial_closed());

    let transition = play_out(&mut engine, perfect_guess);
    let Transition::Completed(summary) = transition else {
        panic!("expected completion, got {transition:?}");
    };
    assert_eq!(summary.total_score, 0.0);
    assert_eq!(summary.perfect_count, 5);
    assert_eq!(engine.ledger().best_for(Difficulty::Medium), Some(0.0));
    assert!(engine.ledger().store().get(HIGH_SCORES_KEY).is_some());
    assert!(engine.ledger().has_played());

    assert_eq!(
        telemetry.names(),
        [
            "game_started",
            "tutorial_interaction",
            "tutorial_interaction",
            "puzzle_completed",
            "perfect_score",
            "puzzle_completed",
            "perfect_score",
            "puzzle_completed",
            "perfect_score",
            "puzzle_completed",
            "perfect_score",
            "puzzle_completed",
            "perfect_score",
            "game_completed",
        ]
    );
    let events = telemetry.events();
    assert_eq!(
        events[0],
        TelemetryEvent::GameStarted {
            mode: GameMode::Zen,
            difficulty: Some(Difficulty::Medium)
        }
    );
    assert_eq!(events[1], TelemetryEvent::TutorialInteraction(TutorialStep::Started));
    assert_eq!(events[2], TelemetryEvent::TutorialInteraction(TutorialStep::Skipped));
    assert!(matches!(
        events.last(),
        Some(TelemetryEvent::GameCompleted { streak: None, perfect_count: 5, .. })
    ));
}

#[test]
fn daily_run_extends_streak_and_blocks_replay() {
    let history = r#"{
        "scores": {
            "2024-01-13": {"date": "2024-01-13", "totalScore": 9.0, "averageScore": 1.5, "perfectCount": 1, "completed": true},
            "2024-01-14": {"date": "2024-01-14", "totalScore": 3.0, "averageScore": 0.5, "perfectCount": 4, "completed": true}
        },
        "currentStreak": 0
    }"#;
    let store = MemoryStore::with_documents([(DAILY_LEDGER_KEY, history), ("has-played", "true")]);
    let telemetry = Recorder::default();
    let mut engine = GameEngine::new(store, FixedClock::new(date("2024-01-15")))
        .with_telemetry(telemetry.clone());
    // Yesterday's record alone does not count until today's run is done.
    assert_eq!(engine.ledger().streak(), 0);
    assert!(engine.can_play_daily());

    let session = engine.start_daily().unwrap();
    assert!(!session.show_tutorial());
    assert_eq!(session.mode(), GameMode::Daily(date("2024-01-15")));
    let ids: Vec<_> = session.puzzles().iter().map(|p| p.id().to_owned()).collect();
    assert_eq!(ids[0], "daily-x4jf946qy");

    let transition = play_out(&mut engine, |engine| {
        let session = engine.session().unwrap();
        // Perfect on the first two puzzles, off by one cell afterwards.
        let answer = perfect_guess(engine);
        if session.current_index() < 2 {
            answer
        } else if answer.x() > 0 {
            Position::new(answer.x() - 1, answer.y())
        } else {
            Position::new(answer.x() + 1, answer.y())
        }
    });
    let Transition::Completed(summary) = transition else {
        panic!("expected completion, got {transition:?}");
    };
    assert_eq!(summary.perfect_count, 2);
    assert_eq!(summary.total_score, 4.0);

    let ledger = engine.ledger();
    assert_eq!(ledger.streak(), 3);
    let record = ledger.daily_record(date("2024-01-15")).unwrap();
    assert!(record.completed);
    assert_eq!(record.perfect_count, 2);
    assert_eq!(record.total_score, 4.0);
    assert!((record.average_score - 4.0 / 6.0).abs() < 1e-12);
    assert!(!engine.can_play_daily());

    let events = telemetry.events();
    assert_eq!(
        events[0],
        TelemetryEvent::GameStarted {
            mode: GameMode::Daily(date("2024-01-15")),
            difficulty: None
        }
    );
    assert!(matches!(
        events[events.len() - 2],
        TelemetryEvent::GameCompleted { streak: Some(3), difficulty: None, .. }
    ));
    assert_eq!(events[events.len() - 1], TelemetryEvent::StreakMilestone { streak: 3 });

    assert_eq!(
        engine.start_daily().unwrap_err(),
        StartBlockReason::DailyAlreadyCompleted {
            date: date("2024-01-15")
        }
    );
    assert!(engine.session().unwrap().is_complete());
}

#[test]
fn streak_without_milestone_sends_no_milestone_event() {
    let history = r#"{"scores": {"2024-01-14": {"date": "2024-01-14", "totalScore": 3.0, "averageScore": 0.5, "perfectCount": 4, "completed": true}}}"#;
    let store = MemoryStore::with_documents([(DAILY_LEDGER_KEY, history)]);
    let telemetry = Recorder::default();
    let mut engine = GameEngine::new(store, FixedClock::new(date("2024-01-15")))
        .with_telemetry(telemetry.clone());

    engine.start_daily().unwrap();
    engine.close_tutorial(TutorialOutcome::Completed);
    play_out(&mut engine, perfect_guess);

    assert_eq!(engine.ledger().streak(), 2);
    assert!(!telemetry.events().iter().any(TelemetryEvent::is_streak_milestone));
}

#[test]
fn telemetry_failures_do_not_affect_play() {
    let mut engine = GameEngine::new(MemoryStore::new(), FixedClock::new(date("2024-01-15")))
        .with_telemetry(Unreachable);
    engine.start_zen(Difficulty::Easy);
    engine.close_tutorial(TutorialOutcome::Completed);
    assert!(play_out(&mut engine, perfect_guess).is_completed());
    assert_eq!(engine.ledger().best_for(Difficulty::Easy), Some(0.0));
}

#[test]
fn broken_storage_keeps_the_game_playable() {
    let mut engine = GameEngine::new(BrokenStore, FixedClock::new(date("2024-01-15")));
    assert!(engine.start_daily().unwrap().show_tutorial());
    engine.close_tutorial(TutorialOutcome::Skipped);
    assert!(play_out(&mut engine, perfect_guess).is_completed());

    assert_eq!(engine.ledger().streak(), 1);
    assert!(!engine.can_play_daily());
}

#[test]
fn malformed_storage_falls_back_to_defaults() {
    let store = MemoryStore::with_documents([
        (HIGH_SCORES_KEY, "not json at all"),
        (DAILY_LEDGER_KEY, r#"{"scores": 12}"#),
    ]);
    let mut engine = GameEngine::new(store, FixedClock::new(date("2024-01-15")));
    assert_eq!(engine.ledger().best_for(Difficulty::Hard), None);
    assert_eq!(engine.ledger().streak(), 0);

    engine.set_metric(DistanceMetric::Manhattan);
    engine.start_zen(Difficulty::Hard);
    engine.close_tutorial(TutorialOutcome::Skipped);
    assert!(play_out(&mut engine, perfect_guess).is_completed());
    assert_eq!(engine.ledger().top_n_for(Difficulty::Hard), [0.0]);
}

#[test]
fn new_run_replaces_unfinished_session() {
    let mut engine = GameEngine::new(MemoryStore::new(), FixedClock::new(date("2024-01-15")));
    engine.start_zen(Difficulty::Easy);
    engine.close_tutorial(TutorialOutcome::Skipped);
    let guess = perfect_guess(&engine);
    engine.guess(guess);

    let session = engine.start_zen(Difficulty::Hard);
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.total_score(), 0.0);
    assert!(!session.is_revealing());
    assert!(session.puzzles().iter().all(|p| !p.is_revealed()));
    assert!(engine.ledger().top_n_for(Difficulty::Easy).is_empty());
}
