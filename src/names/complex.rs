//! Structured names for fighters.

use serde::{Deserialize, Serialize};

use super::Name;
use crate::core::{Result, SkirmishError};

/// One part of a name, with a flag for whether it shows in the display name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameComponent {
    pub text: String,
    pub used: bool,
}

impl NameComponent {
    /// A component that shows in the display name.
    pub fn used(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            used: true,
        }
    }

    /// A component that only shows in the full name.
    pub fn hidden(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            used: false,
        }
    }
}

impl From<&str> for NameComponent {
    fn from(text: &str) -> Self {
        Self::used(text)
    }
}

impl From<String> for NameComponent {
    fn from(text: String) -> Self {
        Self::used(text)
    }
}

/// First, middle, nick and last names.
///
/// ```
/// use skirmish::names::{ComplexName, Name, NameComponent};
///
/// let name = ComplexName::new("Zackery", "Fisher").with_nickname("ZomB");
/// assert_eq!(name.display_name(), "Zackery \"ZomB\" Fisher");
///
/// let quiet = ComplexName::new("Tim", NameComponent::hidden("Marion"))
///     .with_nickname(NameComponent::hidden("Zeltar"));
/// assert_eq!(quiet.display_name(), "Tim");
/// assert_eq!(quiet.full_name(), "Tim \"Zeltar\" Marion");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplexName {
    first: NameComponent,
    last: NameComponent,
    nickname: Option<NameComponent>,
    middle: Vec<NameComponent>,
}

impl ComplexName {
    pub fn new(first: impl Into<NameComponent>, last: impl Into<NameComponent>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            nickname: None,
            middle: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<NameComponent>) -> Self {
        self.nickname = Some(nickname.into());
        self
    }

    #[must_use]
    pub fn with_middle(mut self, middle: impl Into<NameComponent>) -> Self {
        self.middle.push(middle.into());
        self
    }

    #[must_use]
    pub fn first(&self) -> &NameComponent {
        &self.first
    }

    #[must_use]
    pub fn last(&self) -> &NameComponent {
        &self.last
    }

    #[must_use]
    pub fn nickname(&self) -> Option<&NameComponent> {
        self.nickname.as_ref()
    }

    #[must_use]
    pub fn middle_names(&self) -> &[NameComponent] {
        &self.middle
    }

    /// The middle name at `index`.
    ///
    /// Fails if there are no middle names or the index is past the end.
    pub fn middle_name(&self, index: usize) -> Result<&NameComponent> {
        if self.middle.is_empty() {
            return Err(SkirmishError::NoMiddleNames {
                name: self.full_name(),
            });
        }
        self.middle
            .get(index)
            .ok_or(SkirmishError::MiddleNameOutOfRange {
                index,
                last: self.middle.len() - 1,
            })
    }

    /// Components in display order: first, middles, nick, last.
    fn ordered(&self) -> impl Iterator<Item = (&NameComponent, bool)> {
        std::iter::once((&self.first, false))
            .chain(self.middle.iter().map(|m| (m, false)))
            .chain(self.nickname.iter().map(|n| (n, true)))
            .chain(std::iter::once((&self.last, false)))
    }
}

fn render(component: &NameComponent, quoted: bool) -> String {
    if quoted {
        format!("\"{}\"", component.text)
    } else {
        component.text.clone()
    }
}

impl Name for ComplexName {
    fn display_name(&self) -> String {
        let parts: Vec<String> = self
            .ordered()
            .filter(|(c, _)| c.used)
            .map(|(c, quoted)| render(c, quoted))
            .collect();
        if parts.is_empty() {
            return self.first.text.clone();
        }
        parts.join(" ")
    }
}

impl std::fmt::Display for ComplexName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.ordered().map(|(c, quoted)| render(c, quoted)).collect();
        f.write_str(&parts.join(" "))
    }
}
