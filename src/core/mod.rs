//! Core types: errors, seeded RNG, teams and the team registry.

pub mod error;
pub mod rng;
pub mod team;

pub use error::{Result, SkirmishError};
pub use rng::GameRng;
pub use team::{Team, TeamId, TeamRegistry, LABEL_RETRY_LIMIT, MONSTER_TEAM_LABEL};
