//! Console text styling: RGB colors and ANSI decoration.
//!
//! Styling is decoration only. Identifiers used in narration are built with
//! it, but nothing in the combat rules depends on it.

pub mod color;
pub mod text_style;

pub use color::Color;
pub use text_style::{strip_ansi, Style};
