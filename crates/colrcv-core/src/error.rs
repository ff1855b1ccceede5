//! Error types for colrcv
//!
//! Conversions never fail. These errors only arise at the dynamic boundary,
//! where a model is named by a string or channels arrive as a slice.

use thiserror::Error;

/// Result type for colrcv operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in colrcv operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Colour model name not recognised
    #[error("Unknown colour model: {0}")]
    UnknownModel(String),

    /// Wrong number of channel values for a colour
    #[error("Channel count mismatch: expected {expected}, got {actual}")]
    ChannelCount { expected: usize, actual: usize },
}
