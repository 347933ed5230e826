//! Matches: turn order, targeting, termination and winners.
//!
//! - `engine`: the `Match` state machine
//! - `result`: `ContestantId` and `MatchResult`
//! - `event`: narration recorded while a match runs
//! - `config`: `MatchConfig`

pub mod config;
pub mod engine;
pub mod event;
pub mod result;

pub use config::MatchConfig;
pub use engine::{Match, TurnOutcome};
pub use event::{MatchEvent, StallReason};
pub use result::{ContestantId, MatchResult};
