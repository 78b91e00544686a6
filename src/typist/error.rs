//! Error types for the typist.

use std::io;

/// Rejected [`Profile`](super::Profile) parameters.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("WPM (words per minute) must be at least one (was {0})")]
    InvalidSpeed(i64),
    #[error("accuracy must be between 0 and 1 (was {0})")]
    InvalidAccuracy(f64),
}

/// A single keystroke could not be delivered.
#[derive(Debug, thiserror::Error)]
pub enum KeystrokeError {
    #[error("failed to write rune {ch}")]
    Write {
        ch: char,
        #[source]
        source: io::Error,
    },
    #[error("interrupted before typing rune {ch}")]
    Interrupted { ch: char },
}

impl KeystrokeError {
    /// The character that was being typed.
    pub fn ch(&self) -> char {
        match self {
            Self::Write { ch, .. } | Self::Interrupted { ch } => *ch,
        }
    }
}

/// A line was abandoned part-way through.
#[derive(Debug, thiserror::Error)]
#[error("failed to type {line:?}")]
pub struct TypeError {
    /// The line being typed, trimmed of surrounding whitespace.
    pub line: String,
    #[source]
    pub source: KeystrokeError,
}
