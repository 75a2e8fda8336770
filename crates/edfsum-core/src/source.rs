//! Duration probing through the external signal library

use crate::error::SourceError;
use edfplus::{EdfReader, EDFLIB_TIME_DIMENSION};
use std::path::Path;

/// Seam between the batch loop and the signal library. Production code
/// uses [`EdfSource`]; tests substitute a deterministic implementation.
pub trait RecordingSource {
    /// Recording length in seconds, obtained without materializing
    /// sample data.
    fn duration_seconds(&self, path: &Path) -> Result<f64, SourceError>;
}

/// Reads durations from EDF headers. `EdfReader::open` parses only the
/// header block, so probing stays cheap even for multi-hour recordings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdfSource;

impl RecordingSource for EdfSource {
    fn duration_seconds(&self, path: &Path) -> Result<f64, SourceError> {
        let reader = EdfReader::open(path)?;
        let duration = reader.header().file_duration as f64 / EDFLIB_TIME_DIMENSION as f64;
        tracing::trace!("{}: {:.2}s", path.display(), duration);
        Ok(duration)
    }
}
