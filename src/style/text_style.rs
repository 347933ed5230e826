//! ANSI text decoration.

use serde::{Deserialize, Serialize};

use super::Color;

const RESET: &str = "\x1b[0m";

/// How a string is decorated when printed to a terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Foreground color.
    pub fill: Option<Color>,
    /// Background color.
    pub highlight: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Style {
    /// A style with no decoration.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            fill: None,
            highlight: None,
            bold: false,
            italic: false,
            underline: false,
        }
    }

    /// Build a style from a short flag string.
    ///
    /// Only the first three characters are read: `b` bold, `i` italic,
    /// `u` underline. Other characters are ignored.
    ///
    /// ```
    /// use skirmish::style::Style;
    ///
    /// let style = Style::from_flags("bu");
    /// assert!(style.bold && style.underline && !style.italic);
    /// ```
    #[must_use]
    pub fn from_flags(flags: &str) -> Self {
        let mut style = Self::plain();
        for flag in flags.chars().take(3) {
            match flag {
                'b' => style.bold = true,
                'i' => style.italic = true,
                'u' => style.underline = true,
                _ => {}
            }
        }
        style
    }

    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill = Some(color);
        self
    }

    #[must_use]
    pub fn with_highlight(mut self, color: Color) -> Self {
        self.highlight = Some(color);
        self
    }

    /// True if applying this style leaves text unchanged apart from the
    /// trailing reset.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::plain()
    }

    /// Wrap `text` in the escape sequences for this style.
    ///
    /// The result always ends with a reset sequence.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + 48);
        if let Some(Color { r, g, b }) = self.fill {
            out.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
        }
        if let Some(Color { r, g, b }) = self.highlight {
            out.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
        }
        if self.bold {
            out.push_str("\x1b[1m");
        }
        if self.italic {
            out.push_str("\x1b[3m");
        }
        if self.underline {
            out.push_str("\x1b[4m");
        }
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

/// Remove ANSI escape sequences from `text`.
///
/// Used for plain-text narration output.
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters run until the final byte in @..=~.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
