//! The batch loop: probe every discovered file, isolate failures,
//! produce the summary report.

use crate::config::ScanConfig;
use crate::discover::discover_recordings;
use crate::error::{ScanError, ScanResult};
use crate::record::{FileRecord, Outcome};
use crate::report::SummaryReport;
use crate::source::RecordingSource;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Discover recordings under `root` and summarize them.
///
/// Per-file status lines and the summary block are written to `out`.
/// Returns [`ScanError::NoFilesFound`] when the tree holds no matching
/// files; per-file read failures never abort the batch.
pub fn scan_directory<S, W>(
    root: &Path,
    config: &ScanConfig,
    source: &S,
    out: &mut W,
) -> ScanResult<SummaryReport>
where
    S: RecordingSource,
    W: Write,
{
    config.validate()?;

    let paths = discover_recordings(root, config);
    if paths.is_empty() {
        return Err(ScanError::NoFilesFound {
            root: root.to_path_buf(),
            extension: config.extension.clone(),
        });
    }

    writeln!(
        out,
        "Found {} {} files to process...",
        paths.len(),
        config.extension
    )?;

    summarize(&paths, source, out)
}

/// Probe each path in order and fold the outcomes into a report.
///
/// Every failure is captured as a [`Outcome::Failure`] record and the
/// loop continues with the next file.
pub fn summarize<S, W>(paths: &[PathBuf], source: &S, out: &mut W) -> ScanResult<SummaryReport>
where
    S: RecordingSource,
    W: Write,
{
    writeln!(out, "{}", "=".repeat(80))?;

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let record = probe(path, source);
        match &record.outcome {
            Outcome::Success { duration_seconds } => {
                writeln!(
                    out,
                    "✓ {:<40} | {:>8.2}s | {:>6.2}m",
                    record.file_name(),
                    duration_seconds,
                    duration_seconds / 60.0
                )?;
            }
            Outcome::Failure { reason } => {
                tracing::warn!("{}: {}", path.display(), reason);
                writeln!(out, "✗ {:<40} | Failed: {}", record.file_name(), reason)?;
            }
        }
        records.push(record);
    }

    writeln!(out, "{}", "=".repeat(80))?;

    let report = SummaryReport::from_records(&records);
    report.write_summary(out)?;
    Ok(report)
}

/// Probe one file, converting any library error into a failure record
fn probe<S: RecordingSource>(path: &Path, source: &S) -> FileRecord {
    match source.duration_seconds(path) {
        Ok(duration) => FileRecord::success(path, duration),
        Err(error) => FileRecord::failure(path, error.message),
    }
}
