//! Error types for corpus transformations.

use thiserror::Error;
use tm_model::ModelError;

/// Errors that can occur while transforming a corpus table.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A required column is absent from the input schema.
    #[error("column '{column}' not found in table")]
    MissingColumn { column: String },

    /// Reference/name sequences do not form a valid 1:1 table.
    #[error("malformed reference map: {reason}")]
    MalformedMapping { reason: String },

    /// A pattern could not be applied to a row's value.
    #[error("extraction failed at row {row} of column '{column}': {reason}")]
    ExtractionFailure {
        row: usize,
        column: String,
        reason: String,
    },

    /// A non-empty date value is not a `YYYY-MM-DD` calendar date.
    #[error("invalid date '{value}' at row {row} of column '{column}'")]
    InvalidDate {
        row: usize,
        column: String,
        value: String,
    },

    /// An input column would clash with a generated output column.
    #[error("column '{column}' conflicts with a generated output column")]
    ColumnConflict { column: String },

    /// Invalid model input (periodicity, filter bounds).
    #[error(transparent)]
    Model(ModelError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<ModelError> for TransformError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::MalformedMapping { reason } => Self::MalformedMapping { reason },
            other => Self::Model(other),
        }
    }
}

impl From<polars::prelude::PolarsError> for TransformError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
