//! edfsum-core: batch duration summarization for EDF recordings
//!
//! Discovers `.edf` files under a directory tree, probes each one for its
//! recording duration through a header-only open, and folds the results
//! into a summary report. EDF parsing itself is delegated to the
//! `edfplus` crate.

pub mod aggregate;
pub mod config;
pub mod discover;
pub mod error;
pub mod record;
pub mod report;
pub mod source;

pub use aggregate::{scan_directory, summarize};
pub use config::ScanConfig;
pub use discover::discover_recordings;
pub use error::{ScanError, ScanResult, SourceError};
pub use record::{FileRecord, Outcome};
pub use report::SummaryReport;
pub use source::{EdfSource, RecordingSource};
