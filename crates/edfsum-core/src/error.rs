//! Error types for discovery and aggregation

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for scan operations
pub type ScanResult<T> = Result<T, ScanError>;

/// Batch-level failures. Per-file read errors never surface here; they
/// are captured as [`crate::record::Outcome::Failure`] and the batch
/// keeps going.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The root directory held no files with the configured extension.
    /// Distinct from an error while reading a file: the batch simply has
    /// nothing to do.
    #[error("No {extension} files found in {}", .root.display())]
    NoFilesFound {
        /// Directory that was searched
        root: PathBuf,
        /// Extension that was matched against
        extension: String,
    },

    /// Invalid scan configuration
    #[error("Invalid scan configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error
        reason: String,
    },

    /// Failed to write a status line or the summary block
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Failure to read one recording's metadata. Carries the underlying
/// library error as text so it can be attached to a failure record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SourceError {
    /// Human-readable reason, taken from the signal library
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        SourceError {
            message: message.into(),
        }
    }
}

impl From<edfplus::EdfError> for SourceError {
    fn from(err: edfplus::EdfError) -> Self {
        SourceError::new(err.to_string())
    }
}
