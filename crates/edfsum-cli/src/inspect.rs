//! The detail inspector
//!
//! Single-file, eager counterpart of the batch scan: load everything,
//! print metadata, and save diagnostic figures. Errors here fail the
//! whole invocation; there is only one unit of work, so there is nothing
//! to isolate.

use crate::load::{self, Recording};
use crate::plot::{Figure, FigureTracker, TraceSeries};
use anyhow::Result;
use edfsum_analysis::{select_eeg_channels, PsdConfig, PsdEstimator};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed file name for the density figure
pub const PSD_FILE_NAME: &str = "power_spectral_density.svg";

/// Inspector settings
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Directory receiving the generated image files
    pub out_dir: PathBuf,
    /// Welch estimator settings
    pub psd: PsdConfig,
    /// Longest stretch of signal drawn in the raw-trace figure, in
    /// seconds. Zero or negative draws everything.
    pub max_trace_seconds: f64,
}

impl Default for InspectConfig {
    fn default() -> Self {
        InspectConfig {
            out_dir: PathBuf::from("."),
            psd: PsdConfig::default(),
            max_trace_seconds: 30.0,
        }
    }
}

/// Inspect `path`, writing console output to stdout
pub fn inspect(path: &Path, config: &InspectConfig) -> Result<Recording> {
    let mut out = std::io::stdout().lock();
    inspect_to(path, config, &mut out)
}

/// Inspect `path`, writing console output to `out`. Returns the loaded
/// recording for further use.
pub fn inspect_to<W: Write>(path: &Path, config: &InspectConfig, out: &mut W) -> Result<Recording> {
    let recording = load::load_recording(path)?;
    recording.write_info(out)?;

    let mut tracker = FigureTracker::new();
    tracker.add(Figure::raw_traces(
        "Raw EEG Data",
        trace_prefixes(&recording, config.max_trace_seconds),
    ));

    writeln!(
        out,
        "Recording duration: {:.2} seconds",
        recording.duration_seconds
    )?;

    let labels = recording.channel_labels();
    writeln!(out, "Channels: {:?}", labels)?;

    let selection = select_eeg_channels(&labels);
    let title = if selection.eeg_only {
        tracing::debug!("restricting PSD to {} EEG channels", selection.len());
        "Power Spectral Density (EEG Channels)"
    } else {
        tracing::debug!("no EEG channels recognized, analyzing all {}", selection.len());
        "Power Spectral Density"
    };

    let mut estimator = PsdEstimator::new(config.psd.clone())?;
    let mut spectra = Vec::with_capacity(selection.len());
    for &index in &selection.indices {
        let channel = &recording.channels[index];
        spectra.push(estimator.estimate(&channel.label, &channel.samples, channel.sampling_rate)?);
    }
    tracker.add_named(PSD_FILE_NAME, Figure::psd(title, spectra));

    let saved = tracker.persist(&config.out_dir)?;
    for path in &saved {
        tracing::info!("saved {}", path.display());
    }
    writeln!(out, "Figures saved as SVG files")?;

    Ok(recording)
}

/// Clip each channel to the configured trace window
fn trace_prefixes(recording: &Recording, max_seconds: f64) -> Vec<TraceSeries> {
    recording
        .channels
        .iter()
        .map(|channel| {
            let limit = if max_seconds > 0.0 && channel.sampling_rate > 0.0 {
                ((channel.sampling_rate * max_seconds) as usize).min(channel.samples.len())
            } else {
                channel.samples.len()
            };
            TraceSeries {
                label: channel.label.clone(),
                sampling_rate: channel.sampling_rate,
                samples: channel.samples[..limit].to_vec(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use edfplus::{EdfWriter, SignalParam};
    use tempfile::TempDir;

    fn signal(label: &str) -> SignalParam {
        SignalParam {
            label: label.to_string(),
            samples_in_file: 0,
            physical_max: 100.0,
            physical_min: -100.0,
            digital_max: 32767,
            digital_min: -32768,
            samples_per_record: 64,
            physical_dimension: "uV".to_string(),
            prefilter: String::new(),
            transducer: String::new(),
        }
    }

    fn write_fixture(path: &Path, labels: &[&str], seconds: usize) {
        let mut writer = EdfWriter::create(path).unwrap();
        writer
            .set_patient_info("P001", "M", "01-JAN-1990", "Test Patient")
            .unwrap();
        for label in labels {
            writer.add_signal(signal(label)).unwrap();
        }
        for second in 0..seconds {
            let records: Vec<Vec<f64>> = labels
                .iter()
                .map(|_| {
                    (0..64)
                        .map(|i| {
                            let t = (second * 64 + i) as f64 / 64.0;
                            40.0 * (2.0 * std::f64::consts::PI * 8.0 * t).sin()
                        })
                        .collect()
                })
                .collect();
            writer.write_samples(&records).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn test_inspect_eeg_recording() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("rec.edf");
        write_fixture(&file, &["EEG Fp1", "EEG O2"], 4);

        let config = InspectConfig {
            out_dir: dir.path().join("figures"),
            ..Default::default()
        };
        let mut out = Vec::new();
        let recording = inspect_to(&file, &config, &mut out).unwrap();

        assert_eq!(recording.channels.len(), 2);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Recording duration: 4.00 seconds"));
        assert!(text.contains("EEG Fp1"));
        assert!(text.contains("Figures saved as SVG files"));

        // One numbered raw-trace figure plus the fixed-name PSD, no
        // duplicate of the PSD among the numbered files
        assert!(config.out_dir.join("eeg_figure_1.svg").is_file());
        assert!(config.out_dir.join(PSD_FILE_NAME).is_file());
        assert!(!config.out_dir.join("eeg_figure_2.svg").exists());
    }

    #[test]
    fn test_inspect_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let config = InspectConfig {
            out_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let mut out = Vec::new();
        assert!(inspect_to(Path::new("/nonexistent.edf"), &config, &mut out).is_err());
    }

    #[test]
    fn test_trace_prefix_clipping() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("long.edf");
        write_fixture(&file, &["EEG Cz"], 6);

        let recording = crate::load::load_recording(&file).unwrap();
        let traces = trace_prefixes(&recording, 2.0);
        assert_eq!(traces[0].samples.len(), 128);

        let all = trace_prefixes(&recording, 0.0);
        assert_eq!(all[0].samples.len(), 384);
    }
}
