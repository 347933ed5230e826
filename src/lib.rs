//! # skirmish
//!
//! A small turn-based combat simulation. Fighters and monsters belong to
//! teams, teams may be allied, and a match lets every living contestant
//! attack in turn until no hostile pair is left.
//!
//! ## Design Principles
//!
//! 1. **No hidden globals**: teams live in an owned [`TeamRegistry`] that is
//!    passed to whatever needs it. Combatants hold a [`TeamId`] handle.
//!
//! 2. **Reproducible**: every random choice (team labels, turn order) comes
//!    from a seeded [`GameRng`].
//!
//! 3. **Narration is data**: a match records [`MatchEvent`]s; printing them
//!    is up to the caller.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, teams and the team registry
//! - `style`: RGB colors and ANSI text styling
//! - `names`: simple and structured combatant names
//! - `combatants`: the `Killable` capability, fighters and monsters
//! - `arena`: the match state machine, results and narration
//! - `roster`: casts described in TOML
//!
//! ## Example
//!
//! ```
//! use skirmish::{ComplexName, Fighter, Match, MatchConfig, MatchResult, TeamRegistry};
//!
//! let mut teams = TeamRegistry::new(1);
//! let zomb = Fighter::unaffiliated(ComplexName::new("Zackery", "Fisher"), &mut teams);
//! let sol = Fighter::unaffiliated(ComplexName::new("Sigma", "Balls"), &mut teams);
//!
//! let mut game = Match::new(vec![zomb.into(), sol.into()], &teams, &MatchConfig::new().with_seed(3));
//! let result = game.run_to_completion(&teams);
//! assert!(matches!(result, MatchResult::Winner(_)));
//! ```

pub mod arena;
pub mod combatants;
pub mod core;
pub mod names;
pub mod roster;
pub mod style;

pub use crate::core::{GameRng, Result, SkirmishError, Team, TeamId, TeamRegistry};

pub use crate::style::{Color, Style};

pub use crate::names::{ComplexName, Name, NameComponent, SimpleName};

pub use crate::combatants::{AttackOutcome, Combatant, Fighter, Killable, Monster};

pub use crate::arena::{
    ContestantId, Match, MatchConfig, MatchEvent, MatchResult, StallReason, TurnOutcome,
};

pub use crate::roster::Roster;
