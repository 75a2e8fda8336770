//! Eager loading of a single recording
//!
//! Unlike the batch path, which stops at the header, this materializes
//! every channel's full sample stream.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use edfplus::{EdfReader, EDFLIB_TIME_DIMENSION};
use std::io::{self, Write};
use std::path::Path;

/// One channel's fully materialized signal
#[derive(Debug, Clone)]
pub struct ChannelData {
    pub label: String,
    /// Samples per second
    pub sampling_rate: f64,
    /// Physical unit, e.g. "uV"
    pub physical_dimension: String,
    pub samples: Vec<f64>,
}

/// An eagerly loaded recording, returned by the inspector for further
/// interactive use
#[derive(Debug, Clone)]
pub struct Recording {
    pub channels: Vec<ChannelData>,
    /// Time of the last sample, in seconds
    pub duration_seconds: f64,
    pub start: NaiveDateTime,
    pub patient_code: String,
    pub patient_name: String,
    pub equipment: String,
}

impl Recording {
    pub fn channel_labels(&self) -> Vec<String> {
        self.channels.iter().map(|ch| ch.label.clone()).collect()
    }

    /// Print the metadata block for this recording
    pub fn write_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "Info:")?;
        writeln!(out, "  Start: {}", self.start)?;
        writeln!(out, "  Patient: {} ({})", self.patient_name, self.patient_code)?;
        writeln!(out, "  Equipment: {}", self.equipment)?;
        writeln!(out, "  Signals: {}", self.channels.len())?;
        for channel in &self.channels {
            writeln!(
                out,
                "    {:<20} | {:>8.1} Hz | {}",
                channel.label, channel.sampling_rate, channel.physical_dimension
            )?;
        }
        Ok(())
    }
}

/// Open `path` and read every signal in full
pub fn load_recording(path: &Path) -> Result<Recording> {
    let mut reader =
        EdfReader::open(path).with_context(|| format!("failed to open {}", path.display()))?;

    // Copy header fields out before the mutable sample reads below
    let (signals, duration_seconds, record_seconds, start, patient_code, patient_name, equipment) = {
        let header = reader.header();
        (
            header.signals.clone(),
            header.file_duration as f64 / EDFLIB_TIME_DIMENSION as f64,
            header.datarecord_duration as f64 / EDFLIB_TIME_DIMENSION as f64,
            header.start_date.and_time(header.start_time),
            header.patient_code.clone(),
            header.patient_name.clone(),
            header.equipment.clone(),
        )
    };

    let mut channels = Vec::with_capacity(signals.len());
    for (index, signal) in signals.iter().enumerate() {
        let sampling_rate = if record_seconds > 0.0 {
            signal.samples_per_record as f64 / record_seconds
        } else {
            0.0
        };
        let samples = reader
            .read_physical_samples(index, signal.samples_in_file as usize)
            .with_context(|| {
                format!(
                    "failed to read signal '{}' from {}",
                    signal.label,
                    path.display()
                )
            })?;

        channels.push(ChannelData {
            label: signal.label.trim().to_string(),
            sampling_rate,
            physical_dimension: signal.physical_dimension.clone(),
            samples,
        });
    }

    tracing::debug!(
        "loaded {} ({} channels, {:.2}s)",
        path.display(),
        channels.len(),
        duration_seconds
    );

    Ok(Recording {
        channels,
        duration_seconds,
        start,
        patient_code,
        patient_name,
        equipment,
    })
}
