//! Game sessions for centrd.
//!
//! A run is a [`GameSession`]: an ordered list of puzzles, the index of the
//! puzzle in play and the running score. The session is a plain state machine
//! driven by [`SessionEvent`]s; every event yields a [`Transition`] describing
//! what changed, or why the event was ignored.
//!
//! [`GameEngine`] wraps one live session together with the persisted
//! [`ScoreLedger`](centrd_ledger::ScoreLedger) and a [`Telemetry`] sink. It
//! blocks replays of a completed daily challenge, records finished runs and
//! reports lifecycle events.
//!
//! # Examples
//!
//! ```
//! use centrd_core::{DistanceMetric, Difficulty, Position};
//! use centrd_game::{GameMode, GameSession, Transition};
//!
//! let mut session = GameSession::start(GameMode::Zen, Difficulty::Easy, DistanceMetric::Manhattan);
//! while !session.is_complete() {
//!     let transition = session.guess(Position::new(0, 0));
//!     assert!(transition.is_scored());
//!     session.advance();
//! }
//! let summary = session.summary().unwrap();
//! assert_eq!(summary.scores.len(), 5);
//! assert!(summary.total_score >= 0.0);
//! ```

pub use self::{api::*, engine::*, session::*, telemetry::*};

mod api;
mod engine;
mod session;
mod telemetry;
