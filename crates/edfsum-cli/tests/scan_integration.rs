//! End-to-end batch scan over real EDF files written with the signal
//! library itself.

use edfplus::{EdfWriter, SignalParam};
use edfsum_core::{scan_directory, EdfSource, ScanConfig, ScanError};
use std::path::Path;
use tempfile::TempDir;

fn write_recording(path: &Path, seconds: usize) {
    let mut writer = EdfWriter::create(path).unwrap();
    writer
        .set_patient_info("P001", "M", "01-JAN-1990", "Test Patient")
        .unwrap();
    writer
        .add_signal(SignalParam {
            label: "EEG Fp1".to_string(),
            samples_in_file: 0,
            physical_max: 100.0,
            physical_min: -100.0,
            digital_max: 32767,
            digital_min: -32768,
            samples_per_record: 64,
            physical_dimension: "uV".to_string(),
            prefilter: String::new(),
            transducer: String::new(),
        })
        .unwrap();
    for second in 0..seconds {
        let samples: Vec<f64> = (0..64)
            .map(|i| {
                let t = (second * 64 + i) as f64 / 64.0;
                50.0 * (2.0 * std::f64::consts::PI * 10.0 * t).sin()
            })
            .collect();
        writer.write_samples(&[samples]).unwrap();
    }
    writer.finalize().unwrap();
}

#[test]
fn scan_totals_real_recordings_and_isolates_corrupt_files() {
    let dir = TempDir::new().unwrap();
    write_recording(&dir.path().join("short.edf"), 3);
    write_recording(&dir.path().join("long.edf"), 8);
    std::fs::write(dir.path().join("broken.edf"), b"not an edf header").unwrap();

    let mut out = Vec::new();
    let report = scan_directory(dir.path(), &ScanConfig::default(), &EdfSource, &mut out).unwrap();

    assert_eq!(report.file_count, 2);
    assert!((report.total_duration_seconds - 11.0).abs() < 1e-6);
    assert_eq!(report.longest().unwrap().0, "long.edf");
    assert_eq!(report.shortest().unwrap().0, "short.edf");
    assert_eq!(report.failed_files.len(), 1);
    assert_eq!(report.failed_files[0].0, "broken.edf");

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("DURATION SUMMARY:"));
    assert!(text.contains("✗ broken.edf"));
}

#[test]
fn scan_of_empty_directory_reports_no_files() {
    let dir = TempDir::new().unwrap();
    let mut out = Vec::new();
    let result = scan_directory(dir.path(), &ScanConfig::default(), &EdfSource, &mut out);
    assert!(matches!(result, Err(ScanError::NoFilesFound { .. })));
    assert!(out.is_empty());
}
