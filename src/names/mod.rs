//! Combatant names.
//!
//! - `SimpleName`: a name and a nickname, used by monsters.
//! - `ComplexName`: first, middle, nick and last names where each part can
//!   be switched off for display, used by fighters.
//!
//! Both implement [`Name`], which separates the preferred display name from
//! the full name.

pub mod complex;
pub mod simple;

pub use complex::{ComplexName, NameComponent};
pub use simple::SimpleName;

/// Anything that can be displayed as a combatant name.
pub trait Name: std::fmt::Display {
    /// The preferred name used in narration.
    fn display_name(&self) -> String;

    /// Every part of the name, whether used for display or not.
    fn full_name(&self) -> String {
        self.to_string()
    }
}
