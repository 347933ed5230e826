//! Crate-wide error type.
//!
//! Every variant is a local usage error: the caller passed something the
//! library cannot accept. Nothing here is retried or recovered internally.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkirmishError {
    #[error("color channel {channel} must be 0 - 255, got {value}")]
    ColorChannelOutOfRange { channel: char, value: f64 },

    #[error("color channel {channel} must be an integer, got {value}")]
    ColorChannelNotInteger { channel: char, value: f64 },

    #[error("no middle names exist for {name}")]
    NoMiddleNames { name: String },

    #[error("middle name index {index} is out of bounds of 0 - {last}")]
    MiddleNameOutOfRange { index: usize, last: usize },

    #[error("a team labelled {0:?} already exists")]
    DuplicateTeamLabel(String),

    #[error("unknown team {0:?}")]
    UnknownTeam(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("roster parse error: {0}")]
    RosterParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, SkirmishError>;
