//! Error types for the OKLCH explorer core.
//!
//! [`ValidationError`] is the only error the UI layer sees for channel input:
//! a closed shape of channel plus reason. [`ExplorerError`] covers everything
//! outside that taxonomy (unknown channel names, bad configuration).

use crate::channel::Channel;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Why a raw channel string was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationErrorKind {
    /// The input was empty, unparseable, NaN, or infinite.
    #[error("not a number")]
    NotANumber { raw: String },

    /// The input parsed but falls outside the channel's closed interval.
    #[error("must be between {min} and {max}")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// A rejected channel value, attached by the caller to the field that produced it.
///
/// Displays as `"c: not a number"` or `"l must be between 0 and 1"`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub channel: Channel,
    pub kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn not_a_number(channel: Channel, raw: &str) -> Self {
        Self {
            channel,
            kind: ValidationErrorKind::NotANumber {
                raw: raw.to_string(),
            },
        }
    }

    pub fn out_of_range(channel: Channel, value: f64, min: f64, max: f64) -> Self {
        Self {
            channel,
            kind: ValidationErrorKind::OutOfRange { value, min, max },
        }
    }

    /// Human-readable reason, e.g. `"l must be between 0 and 1"` or `"not a number"`.
    pub fn message(&self) -> String {
        match self.kind {
            ValidationErrorKind::NotANumber { .. } => self.kind.to_string(),
            ValidationErrorKind::OutOfRange { .. } => format!("{} {}", self.channel, self.kind),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ValidationErrorKind::NotANumber { .. } => write!(f, "{}: {}", self.channel, self.kind),
            ValidationErrorKind::OutOfRange { .. } => f.write_str(&self.message()),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Serializes as `{ "channel": "l", "message": "..." }`.
impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationError", 2)?;
        state.serialize_field("channel", self.channel.name())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Errors produced by explorer operations other than channel validation.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// A channel name other than `l`, `c`, or `h`.
    #[error("unknown channel: {0}")]
    UnknownChannel(String),

    /// A channel value failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A configuration value was missing its invariants.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A lightness range for random colors was empty or outside [0, 1].
    #[error("invalid lightness range: [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
}
