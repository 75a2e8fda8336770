//! Error types for spectral analysis

use thiserror::Error;

/// Result type alias for analysis operations
pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A channel carried no samples, or too few to analyze
    #[error("Channel '{label}' has too few samples")]
    EmptySignal {
        /// Channel label
        label: String,
    },

    /// Sampling rate must be strictly positive
    #[error("Invalid sampling rate: {rate} Hz")]
    InvalidSamplingRate {
        /// Offending rate
        rate: f64,
    },

    /// Invalid estimator configuration
    #[error("Invalid PSD configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error
        reason: String,
    },
}
