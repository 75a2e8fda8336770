//! Batch summary report

use crate::record::{FileRecord, Outcome};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::io::{self, Write};

/// Aggregated result of one batch run.
///
/// Invariants: `total_duration_seconds` is the exact sum of the durations
/// in `successful_files`, and `file_count` equals the number of entries
/// there. `successful_files` is sorted descending by duration; equal
/// durations keep discovery order (stable sort), which is the documented
/// tie-break for the longest/shortest selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    pub total_duration_seconds: f64,
    pub total_duration_minutes: f64,
    pub total_duration_hours: f64,
    /// `(file name, duration in seconds)`, longest first
    pub successful_files: Vec<(String, f64)>,
    /// `(file name, captured error text)` in discovery order
    pub failed_files: Vec<(String, String)>,
    /// Number of successfully processed files
    pub file_count: usize,
}

impl SummaryReport {
    /// Fold a batch of per-file records into a report
    pub fn from_records(records: &[FileRecord]) -> Self {
        let mut successful_files = Vec::new();
        let mut failed_files = Vec::new();

        for record in records {
            match &record.outcome {
                Outcome::Success { duration_seconds } => {
                    successful_files.push((record.file_name(), *duration_seconds));
                }
                Outcome::Failure { reason } => {
                    failed_files.push((record.file_name(), reason.clone()));
                }
            }
        }

        let total: f64 = successful_files.iter().map(|(_, d)| d).sum();

        // Stable sort: ties keep discovery order
        successful_files.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        SummaryReport {
            total_duration_seconds: total,
            total_duration_minutes: total / 60.0,
            total_duration_hours: total / 3600.0,
            file_count: successful_files.len(),
            successful_files,
            failed_files,
        }
    }

    /// Mean duration over successful files. `None` when nothing
    /// succeeded, so no division is attempted on an empty batch.
    pub fn average_duration(&self) -> Option<f64> {
        if self.file_count == 0 {
            return None;
        }
        Some(self.total_duration_seconds / self.file_count as f64)
    }

    /// Longest successful recording, if any
    pub fn longest(&self) -> Option<&(String, f64)> {
        self.successful_files.first()
    }

    /// Shortest successful recording, if any
    pub fn shortest(&self) -> Option<&(String, f64)> {
        self.successful_files.last()
    }

    /// Render the human-readable summary block
    pub fn write_summary<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "DURATION SUMMARY:")?;
        writeln!(out, "Successfully processed: {} files", self.file_count)?;
        writeln!(out, "Failed to process: {} files", self.failed_files.len())?;
        writeln!(
            out,
            "Total recording duration: {:.2} seconds",
            self.total_duration_seconds
        )?;
        writeln!(
            out,
            "Total recording duration: {:.2} minutes",
            self.total_duration_minutes
        )?;
        writeln!(
            out,
            "Total recording duration: {:.2} hours",
            self.total_duration_hours
        )?;

        if let Some(average) = self.average_duration() {
            writeln!(
                out,
                "Average duration per file: {:.2} seconds ({:.2} minutes)",
                average,
                average / 60.0
            )?;
        }

        if let (Some(longest), Some(shortest)) = (self.longest(), self.shortest()) {
            writeln!(out)?;
            writeln!(out, "Longest recording: {} ({:.2}s)", longest.0, longest.1)?;
            writeln!(out, "Shortest recording: {} ({:.2}s)", shortest.0, shortest.1)?;
        }

        if !self.failed_files.is_empty() {
            writeln!(out)?;
            writeln!(out, "Failed files:")?;
            for (name, error) in &self.failed_files {
                writeln!(out, "  ✗ {}: {}", name, error)?;
            }
        }

        Ok(())
    }
}
