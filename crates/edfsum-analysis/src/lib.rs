//! edfsum-analysis: channel selection and spectral estimation
//!
//! The pieces of the inspector that look at signal content: deciding
//! which channels count as EEG, and estimating their power spectral
//! density.

pub mod channels;
pub mod error;
pub mod psd;

pub use channels::{select_eeg_channels, ChannelSelection, EEG_LABELS, EXCLUDED_CHANNELS};
pub use error::{AnalysisError, AnalysisResult};
pub use psd::{PsdConfig, PsdEstimator, PsdSpectrum};
