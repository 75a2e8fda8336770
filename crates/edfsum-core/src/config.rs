//! Scan configuration

use crate::error::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// Settings for directory discovery and batch summarization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File name suffix that identifies a recording. Matched
    /// case-sensitively against the full file name.
    pub extension: String,
    /// Follow symbolic links while walking the tree
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            extension: ".edf".to_string(),
            follow_links: false,
        }
    }
}

impl ScanConfig {
    pub fn with_extension(extension: impl Into<String>) -> Self {
        ScanConfig {
            extension: extension.into(),
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ScanResult<()> {
        if self.extension.is_empty() {
            return Err(ScanError::InvalidConfig {
                reason: "extension cannot be empty".to_string(),
            });
        }
        if !self.extension.starts_with('.') {
            return Err(ScanError::InvalidConfig {
                reason: format!("extension '{}' must start with '.'", self.extension),
            });
        }
        Ok(())
    }
}
