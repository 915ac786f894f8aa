//! Error types for stopscan.
//!
//! Every fallible operation in the crate happens while a matcher is being
//! built. Analysis itself never fails.

use std::io;

use thiserror::Error;

/// The error type returned when a [`StopwordMatcher`](crate::StopwordMatcher)
/// cannot be constructed.
#[derive(Debug, Error)]
pub enum StopscanError {
    /// The stopword list is not usable text (for example, invalid UTF-8).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The phrase list could not be compiled into a matcher.
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    /// Reading the stopword list failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StopscanError {
    /// Create an [`StopscanError::InvalidInput`] error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        StopscanError::InvalidInput(msg.into())
    }

    /// Create an [`StopscanError::InvalidPattern`] error.
    pub fn invalid_pattern<S: Into<String>>(msg: S) -> Self {
        StopscanError::InvalidPattern(msg.into())
    }
}

impl From<regex::Error> for StopscanError {
    fn from(err: regex::Error) -> Self {
        StopscanError::invalid_pattern(err.to_string())
    }
}

/// Result type alias for stopscan operations.
pub type Result<T> = std::result::Result<T, StopscanError>;
