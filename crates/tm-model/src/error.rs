//! Error types for corpus model construction.

use thiserror::Error;

/// Errors raised while building model values from user input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// Reference/name sequences do not form a 1:1 table.
    #[error("malformed reference map: {reason}")]
    MalformedMapping { reason: String },

    /// Periodicity string is not one of `day`, `month`, `year`.
    #[error("unknown periodicity '{value}' (expected day, month or year)")]
    UnknownPeriodicity { value: String },

    /// An option value is outside its accepted range.
    #[error("invalid value for {name}: {reason}")]
    InvalidOption { name: String, reason: String },
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
