//! Match outcomes and contestant handles.

use serde::{Deserialize, Serialize};

/// Stable handle for a contestant: its position in the list the match was
/// created with. Shuffling turn order never changes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ContestantId(pub u32);

impl ContestantId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ContestantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Contestant({})", self.0)
    }
}

/// Result of a finished match.
///
/// Winners are exactly the contestants alive when the match finished.
/// Several winners means the match stopped because no hostile pair was
/// left, not because one combatant was left standing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Single survivor.
    Winner(ContestantId),
    /// Joint victory of every survivor.
    Winners(Vec<ContestantId>),
    /// Nobody left alive.
    NoWinner,
}

impl MatchResult {
    /// Build a result from the survivors.
    #[must_use]
    pub fn from_survivors(mut survivors: Vec<ContestantId>) -> Self {
        survivors.sort_unstable();
        match survivors.len() {
            0 => MatchResult::NoWinner,
            1 => MatchResult::Winner(survivors[0]),
            _ => MatchResult::Winners(survivors),
        }
    }

    #[must_use]
    pub fn is_winner(&self, contestant: ContestantId) -> bool {
        match self {
            MatchResult::Winner(c) => *c == contestant,
            MatchResult::Winners(cs) => cs.contains(&contestant),
            MatchResult::NoWinner => false,
        }
    }

    /// The winners, sorted by id.
    #[must_use]
    pub fn winners(&self) -> Vec<ContestantId> {
        match self {
            MatchResult::Winner(c) => vec![*c],
            MatchResult::Winners(cs) => cs.clone(),
            MatchResult::NoWinner => Vec::new(),
        }
    }
}
