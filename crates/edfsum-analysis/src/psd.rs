//! Welch power spectral density estimation
//!
//! Segments the signal with a Hann window and 50% overlap, averages the
//! per-segment periodograms, and normalizes to a one-sided density.

use crate::error::{AnalysisError, AnalysisResult};
use rustfft::{num_complex::Complex, FftPlanner};
use serde::{Deserialize, Serialize};

/// Welch estimator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PsdConfig {
    /// Segment length in samples. Clamped down to the signal length for
    /// short recordings.
    pub segment_len: usize,
    /// Fractional overlap between consecutive segments, 0.0 to <1.0
    pub overlap: f64,
}

impl Default for PsdConfig {
    fn default() -> Self {
        PsdConfig {
            segment_len: 1024,
            overlap: 0.5,
        }
    }
}

impl PsdConfig {
    /// Validate configuration
    pub fn validate(&self) -> AnalysisResult<()> {
        if self.segment_len < 8 {
            return Err(AnalysisError::InvalidConfig {
                reason: format!("segment length {} is too small", self.segment_len),
            });
        }
        if !(0.0..1.0).contains(&self.overlap) {
            return Err(AnalysisError::InvalidConfig {
                reason: format!("overlap {} must be in [0, 1)", self.overlap),
            });
        }
        Ok(())
    }
}

/// One-sided power spectral density for a single channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsdSpectrum {
    /// Channel label the spectrum was computed from
    pub label: String,
    /// Bin center frequencies in Hz, ascending from DC to Nyquist
    pub frequencies: Vec<f64>,
    /// Power density per bin
    pub power: Vec<f64>,
}

impl PsdSpectrum {
    /// Frequency of the strongest bin
    pub fn peak_frequency(&self) -> Option<f64> {
        self.power
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(i, _)| self.frequencies[i])
    }
}

/// Welch PSD estimator. Holds the FFT planner so repeated channels of
/// the same length reuse their plan.
pub struct PsdEstimator {
    planner: FftPlanner<f64>,
    config: PsdConfig,
}

impl PsdEstimator {
    pub fn new(config: PsdConfig) -> AnalysisResult<Self> {
        config.validate()?;
        Ok(PsdEstimator {
            planner: FftPlanner::new(),
            config,
        })
    }

    pub fn config(&self) -> &PsdConfig {
        &self.config
    }

    /// Estimate the one-sided PSD of `samples` recorded at
    /// `sampling_rate` Hz.
    pub fn estimate(
        &mut self,
        label: &str,
        samples: &[f64],
        sampling_rate: f64,
    ) -> AnalysisResult<PsdSpectrum> {
        if samples.len() < 2 {
            return Err(AnalysisError::EmptySignal {
                label: label.to_string(),
            });
        }
        if sampling_rate <= 0.0 || !sampling_rate.is_finite() {
            return Err(AnalysisError::InvalidSamplingRate {
                rate: sampling_rate,
            });
        }

        let segment_len = self.config.segment_len.min(samples.len());
        let step = ((segment_len as f64) * (1.0 - self.config.overlap)) as usize;
        let step = step.max(1);

        let window = hann_window(segment_len);
        // Window power, for density normalization
        let window_power: f64 = window.iter().map(|w| w * w).sum();

        let fft = self.planner.plan_fft_forward(segment_len);
        let bins = segment_len / 2 + 1;
        let mut accumulated = vec![0.0f64; bins];
        let mut segments = 0usize;

        let mut start = 0;
        while start + segment_len <= samples.len() {
            let mut buffer: Vec<Complex<f64>> = samples[start..start + segment_len]
                .iter()
                .zip(window.iter())
                .map(|(&x, &w)| Complex::new(x * w, 0.0))
                .collect();

            fft.process(&mut buffer);

            for (bin, value) in buffer[..bins].iter().enumerate() {
                accumulated[bin] += value.norm_sqr();
            }
            segments += 1;
            start += step;
        }
        debug_assert!(segments > 0, "segment_len is clamped to the signal length");

        let scale = 1.0 / (segments as f64 * sampling_rate * window_power);
        let freq_resolution = sampling_rate / segment_len as f64;

        let mut power = Vec::with_capacity(bins);
        let mut frequencies = Vec::with_capacity(bins);
        for bin in 0..bins {
            let mut p = accumulated[bin] * scale;
            // One-sided spectrum: interior bins carry both halves
            let is_nyquist = segment_len % 2 == 0 && bin == bins - 1;
            if bin != 0 && !is_nyquist {
                p *= 2.0;
            }
            power.push(p);
            frequencies.push(bin as f64 * freq_resolution);
        }

        Ok(PsdSpectrum {
            label: label.to_string(),
            frequencies,
            power,
        })
    }
}

/// Hann window of length `n`
fn hann_window(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let x = std::f64::consts::PI * i as f64 / n as f64;
            x.sin() * x.sin()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sine(freq: f64, rate: f64, len: usize) -> Vec<f64> {
        (0..len)
            .map(|i| (2.0 * std::f64::consts::PI * freq * i as f64 / rate).sin())
            .collect()
    }

    #[test]
    fn test_sine_peak_at_expected_frequency() {
        let rate = 256.0;
        let samples = sine(10.0, rate, 2048);
        let mut estimator = PsdEstimator::new(PsdConfig {
            segment_len: 256,
            overlap: 0.5,
        })
        .unwrap();

        let spectrum = estimator.estimate("Fp1", &samples, rate).unwrap();
        let peak = spectrum.peak_frequency().unwrap();
        // 256-sample segments at 256 Hz give 1 Hz resolution
        assert!((peak - 10.0).abs() <= 1.0, "peak at {} Hz", peak);
    }

    #[test]
    fn test_constant_signal_peaks_at_dc() {
        let samples = vec![3.0; 1024];
        let mut estimator = PsdEstimator::new(PsdConfig::default()).unwrap();
        let spectrum = estimator.estimate("DC", &samples, 100.0).unwrap();
        assert_eq!(spectrum.peak_frequency(), Some(0.0));
    }

    #[test]
    fn test_frequency_axis_spans_dc_to_nyquist() {
        let samples = sine(5.0, 64.0, 512);
        let mut estimator = PsdEstimator::new(PsdConfig {
            segment_len: 128,
            overlap: 0.5,
        })
        .unwrap();
        let spectrum = estimator.estimate("Cz", &samples, 64.0).unwrap();
        assert_eq!(spectrum.frequencies.first(), Some(&0.0));
        assert!((spectrum.frequencies.last().unwrap() - 32.0).abs() < 1e-9);
        assert_eq!(spectrum.frequencies.len(), spectrum.power.len());
    }

    #[test]
    fn test_short_signal_clamps_segment() {
        // Signal shorter than the configured segment still yields a spectrum
        let samples = sine(2.0, 32.0, 40);
        let mut estimator = PsdEstimator::new(PsdConfig::default()).unwrap();
        let spectrum = estimator.estimate("O1", &samples, 32.0).unwrap();
        assert_eq!(spectrum.power.len(), 40 / 2 + 1);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let mut estimator = PsdEstimator::new(PsdConfig::default()).unwrap();
        assert!(matches!(
            estimator.estimate("Fp1", &[], 256.0),
            Err(AnalysisError::EmptySignal { .. })
        ));
        assert!(matches!(
            estimator.estimate("Fp1", &[1.0, 2.0, 3.0], 0.0),
            Err(AnalysisError::InvalidSamplingRate { .. })
        ));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(PsdEstimator::new(PsdConfig {
            segment_len: 4,
            overlap: 0.5
        })
        .is_err());
        assert!(PsdEstimator::new(PsdConfig {
            segment_len: 256,
            overlap: 1.0
        })
        .is_err());
    }
}
