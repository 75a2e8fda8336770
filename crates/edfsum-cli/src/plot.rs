//! Figure construction and persistence
//!
//! Figures are plain values gathered by a [`FigureTracker`] rather than
//! looked up from a process-wide registry, so the inspector always knows
//! the complete set it created and releases everything after persisting.

use anyhow::{Context, Result};
use edfsum_analysis::PsdSpectrum;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::{Path, PathBuf};

/// Fixed output dimensions for every figure, in pixels
pub const FIGURE_SIZE: (u32, u32) = (1600, 900);

/// One trace in a raw-signal figure
#[derive(Debug, Clone)]
pub struct TraceSeries {
    pub label: String,
    pub sampling_rate: f64,
    pub samples: Vec<f64>,
}

/// A figure waiting to be rendered
#[derive(Debug, Clone)]
pub struct Figure {
    pub title: String,
    kind: FigureKind,
}

#[derive(Debug, Clone)]
enum FigureKind {
    RawTraces { traces: Vec<TraceSeries> },
    Psd { spectra: Vec<PsdSpectrum> },
}

impl Figure {
    pub fn raw_traces(title: impl Into<String>, traces: Vec<TraceSeries>) -> Self {
        Figure {
            title: title.into(),
            kind: FigureKind::RawTraces { traces },
        }
    }

    pub fn psd(title: impl Into<String>, spectra: Vec<PsdSpectrum>) -> Self {
        Figure {
            title: title.into(),
            kind: FigureKind::Psd { spectra },
        }
    }

    /// Render this figure to `path` as an SVG image
    pub fn render(&self, path: &Path) -> Result<()> {
        let root = SVGBackend::new(path, FIGURE_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        match &self.kind {
            FigureKind::RawTraces { traces } => draw_raw_traces(&root, &self.title, traces)?,
            FigureKind::Psd { spectra } => draw_psd(&root, &self.title, spectra)?,
        }
        root.present()
            .with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

fn draw_raw_traces(
    root: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    traces: &[TraceSeries],
) -> Result<()> {
    let max_time = traces
        .iter()
        .filter(|t| t.sampling_rate > 0.0)
        .map(|t| t.samples.len() as f64 / t.sampling_rate)
        .fold(0.0f64, f64::max)
        .max(1e-6);
    let lanes = traces.len().max(1) as f64;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 32))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(110)
        .build_cartesian_2d(0.0..max_time, -1.0..lanes)?;

    chart
        .configure_mesh()
        .x_desc("Time (s)")
        .disable_y_mesh()
        .y_labels(traces.len() + 2)
        .y_label_formatter(&|y: &f64| {
            // Lane centers are labeled with their channel name
            let lane = y.round();
            if (y - lane).abs() < 1e-6 && lane >= 0.0 && (lane as usize) < traces.len() {
                traces[lane as usize].label.clone()
            } else {
                String::new()
            }
        })
        .draw()?;

    for (lane, trace) in traces.iter().enumerate() {
        if trace.sampling_rate <= 0.0 {
            continue;
        }
        // Normalize each trace into its own lane
        let peak = trace
            .samples
            .iter()
            .fold(0.0f64, |m, &v| m.max(v.abs()))
            .max(1e-12);
        let baseline = lane as f64;
        let rate = trace.sampling_rate;
        let color = Palette99::pick(lane).to_rgba();

        chart.draw_series(LineSeries::new(
            trace
                .samples
                .iter()
                .enumerate()
                .map(move |(i, &v)| (i as f64 / rate, baseline + 0.45 * v / peak)),
            &color,
        ))?;
    }

    Ok(())
}

fn draw_psd(
    root: &DrawingArea<SVGBackend, Shift>,
    title: &str,
    spectra: &[PsdSpectrum],
) -> Result<()> {
    let max_freq = spectra
        .iter()
        .filter_map(|s| s.frequencies.last().copied())
        .fold(0.0f64, f64::max)
        .max(1.0);

    // Decibel curves, floored to keep log10 finite
    let curves: Vec<(String, Vec<(f64, f64)>)> = spectra
        .iter()
        .map(|s| {
            let points = s
                .frequencies
                .iter()
                .zip(s.power.iter())
                .map(|(&f, &p)| (f, 10.0 * p.max(1e-12).log10()))
                .collect();
            (s.label.clone(), points)
        })
        .collect();

    let (mut min_db, mut max_db) = (f64::INFINITY, f64::NEG_INFINITY);
    for (_, points) in &curves {
        for &(_, db) in points {
            min_db = min_db.min(db);
            max_db = max_db.max(db);
        }
    }
    if !min_db.is_finite() || !max_db.is_finite() || min_db >= max_db {
        min_db = -120.0;
        max_db = 0.0;
    }
    let pad = (max_db - min_db) * 0.05;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 32))
        .margin(12)
        .x_label_area_size(44)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..max_freq, (min_db - pad)..(max_db + pad))?;

    chart
        .configure_mesh()
        .x_desc("Frequency (Hz)")
        .y_desc("Power (dB)")
        .draw()?;

    for (index, (label, points)) in curves.iter().enumerate() {
        let color = Palette99::pick(index).to_rgba();
        let legend_color = color;
        chart
            .draw_series(LineSeries::new(points.iter().copied(), &color))?
            .label(label.clone())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 18, y)], legend_color)
            });
    }

    if !curves.is_empty() {
        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    Ok(())
}

/// Accumulates every figure the inspector creates and persists them in
/// one pass. A figure registered with a fixed file name is written under
/// that name; the rest get sequential `eeg_figure_{i}` names. Each
/// figure is written exactly once.
#[derive(Debug, Default)]
pub struct FigureTracker {
    entries: Vec<(Option<String>, Figure)>,
}

impl FigureTracker {
    pub fn new() -> Self {
        FigureTracker::default()
    }

    pub fn add(&mut self, figure: Figure) {
        self.entries.push((None, figure));
    }

    pub fn add_named(&mut self, file_name: impl Into<String>, figure: Figure) {
        self.entries.push((Some(file_name.into()), figure));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write every tracked figure into `out_dir` and return the created
    /// paths. Consumes the tracker: the figures are released once saved.
    pub fn persist(self, out_dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(out_dir)
            .with_context(|| format!("failed to create {}", out_dir.display()))?;

        let mut saved = Vec::with_capacity(self.entries.len());
        let mut unnamed = 0usize;
        for (name, figure) in self.entries {
            let file_name = match name {
                Some(name) => name,
                None => {
                    unnamed += 1;
                    format!("eeg_figure_{}.svg", unnamed)
                }
            };
            let path = out_dir.join(file_name);
            figure.render(&path)?;
            saved.push(path);
        }
        Ok(saved)
    }
}
