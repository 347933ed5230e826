//! 24-bit RGB colors.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result, SkirmishError};

/// An RGB color. Channels are always 0-255.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::new(255, 0, 0);

    /// Create a color from channels already known to be in range.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from untyped numeric channels.
    ///
    /// Each channel must be an integer in 0-255. Anything else is a usage
    /// error naming the offending channel.
    ///
    /// ```
    /// use skirmish::style::Color;
    ///
    /// assert_eq!(Color::from_channels(255.0, 0.0, 10.0).unwrap(), Color::new(255, 0, 10));
    /// assert!(Color::from_channels(256.0, 0.0, 0.0).is_err());
    /// assert!(Color::from_channels(1.5, 0.0, 0.0).is_err());
    /// ```
    pub fn from_channels(r: f64, g: f64, b: f64) -> Result<Self> {
        Ok(Self {
            r: checked_channel('r', r)?,
            g: checked_channel('g', g)?,
            b: checked_channel('b', b)?,
        })
    }

    /// Generate a random color.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::new(rng.gen_u8(), rng.gen_u8(), rng.gen_u8())
    }
}

fn checked_channel(channel: char, value: f64) -> Result<u8> {
    if !(0.0..=255.0).contains(&value) {
        return Err(SkirmishError::ColorChannelOutOfRange { channel, value });
    }
    if value.fract() != 0.0 {
        return Err(SkirmishError::ColorChannelNotInteger { channel, value });
    }
    Ok(value as u8)
}
