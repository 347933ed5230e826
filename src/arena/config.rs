//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Settings for a single match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Seed for turn-order shuffles. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl MatchConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The RNG a match built from this config shuffles with.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}
