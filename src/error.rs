//! Error types for sign-eval operations.

use thiserror::Error;

/// Result type alias for sign-eval operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or evaluating a dataset.
///
/// Evaluation itself never fails: unrecognized sign types produce a zero
/// score and an empty denominator produces `100.0`. Errors only come from
/// the I/O edges (directory walking and prediction import).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Error while walking or reading a dataset directory.
    #[error("Dataset error: {0}")]
    Dataset(String),

    /// Error importing prediction CSV data.
    #[error("CSV import error at line {line}: {reason}")]
    CsvImport {
        /// Line number where the error occurred.
        line: usize,
        /// Reason for the failure.
        reason: String,
    },

    /// I/O error wrapper.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
