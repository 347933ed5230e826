use serde::{Deserialize, Serialize};

use super::Name;

/// A primary name plus a nickname.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleName {
    name: String,
    nickname: String,
}

impl SimpleName {
    /// Create a name whose nickname is the name itself.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            nickname: name.clone(),
            name,
        }
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn nickname(&self) -> &str {
        &self.nickname
    }
}

impl Name for SimpleName {
    fn display_name(&self) -> String {
        self.name.clone()
    }
}

impl std::fmt::Display for SimpleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.nickname)
    }
}
