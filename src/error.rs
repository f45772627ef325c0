//! Error types
//!
//! The generator itself cannot fail on any `i32` seed. Errors only arise at
//! the edges of the API: bounded sampling with an empty or inverted range,
//! helpers called with an unusable alphabet, and state or configuration
//! coming from outside the process.

use thiserror::Error;

/// Errors returned by the fallible parts of the crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    /// A bounded draw was requested with `max <= min` or a non-finite bound.
    ///
    /// No sample is consumed when this error is returned.
    #[error("invalid range: min {min} must be strictly below max {max}")]
    InvalidRange {
        /// Lower bound as supplied by the caller.
        min: String,
        /// Upper bound as supplied by the caller.
        max: String,
    },

    /// A random string was requested over an empty alphabet.
    #[error("charset must contain at least one character")]
    EmptyCharset,

    /// A restored generator snapshot breaks the buffer or cursor invariants.
    #[error("invalid generator state: {0}")]
    InvalidState(String),

    /// A configured seed is not a signed 32-bit integer.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}

impl RandomError {
    pub(crate) fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        RandomError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RandomError>;
