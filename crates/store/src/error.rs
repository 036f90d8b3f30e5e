//! Store error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the store layer.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// Infrastructure failures only (missing files, unparseable rows). Domain
/// failures are raised by the entities themselves.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record source is missing or unreadable.
    #[error("record source {path:?} is unavailable: {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed into an order or customer.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },
}

impl StoreError {
    pub fn unavailable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Unavailable {
            path: path.into(),
            source,
        }
    }

    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
