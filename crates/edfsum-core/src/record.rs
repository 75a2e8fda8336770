//! Per-file processing records

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Result of probing a single recording for its duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Header was read and a duration obtained
    Success {
        /// Recording length in seconds
        duration_seconds: f64,
    },
    /// The signal library rejected the file
    Failure {
        /// Captured error text
        reason: String,
    },
}

/// One discovered file together with its probe outcome. Immutable once
/// built; the aggregation step folds a batch of these into a
/// [`crate::report::SummaryReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path as produced by discovery
    pub path: PathBuf,
    /// Success or captured failure
    pub outcome: Outcome,
}

impl FileRecord {
    pub fn success(path: impl Into<PathBuf>, duration_seconds: f64) -> Self {
        FileRecord {
            path: path.into(),
            outcome: Outcome::Success { duration_seconds },
        }
    }

    pub fn failure(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        FileRecord {
            path: path.into(),
            outcome: Outcome::Failure {
                reason: reason.into(),
            },
        }
    }

    /// File name portion of the path, for report lines
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    pub fn duration_seconds(&self) -> Option<f64> {
        match self.outcome {
            Outcome::Success { duration_seconds } => Some(duration_seconds),
            Outcome::Failure { .. } => None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success { .. })
    }
}
