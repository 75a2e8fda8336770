//! EEG channel selection policy
//!
//! Clinical EDF exports mix EEG electrodes with auxiliary channels
//! (oximetry, capnography, DC inputs). Spectral analysis should run on
//! the electrodes only when any can be identified, and fall back to
//! every channel otherwise.

use serde::{Deserialize, Serialize};

/// Canonical 10-20 electrode labels, matched case-insensitively as
/// substrings so that montage variants like "EEG Fp1-Ref" still qualify.
pub const EEG_LABELS: [&str; 19] = [
    "FP1", "FP2", "F3", "F4", "C3", "C4", "P3", "P4", "O1", "O2", "F7", "F8", "T3", "T4", "T5",
    "T6", "FZ", "CZ", "PZ",
];

/// Auxiliary channels that must never be analyzed as EEG, matched by
/// exact label. "SpO2" would otherwise pass the substring test above
/// (it contains "O2").
pub const EXCLUDED_CHANNELS: [&str; 8] = [
    "SpO2", "EtCO2", "Pulse", "CO2Wave", "DC03", "DC04", "DC05", "DC06",
];

/// Outcome of the selection policy. Not persisted; recomputed per
/// inspector invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSelection {
    /// Indices into the original channel list
    pub indices: Vec<usize>,
    /// Labels of the selected channels, in original order
    pub labels: Vec<String>,
    /// True when the EEG filter matched; false when the all-channels
    /// fallback was taken
    pub eeg_only: bool,
}

impl ChannelSelection {
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }
}

/// Select the EEG subset of `labels`, or every channel when no label
/// looks like an electrode.
pub fn select_eeg_channels<S: AsRef<str>>(labels: &[S]) -> ChannelSelection {
    let mut indices = Vec::new();
    let mut selected = Vec::new();

    for (index, label) in labels.iter().enumerate() {
        let label = label.as_ref();
        let upper = label.to_uppercase();
        let looks_like_eeg = EEG_LABELS.iter().any(|tag| upper.contains(tag));
        let excluded = EXCLUDED_CHANNELS.iter().any(|aux| *aux == label);

        if looks_like_eeg && !excluded {
            indices.push(index);
            selected.push(label.to_string());
        }
    }

    if indices.is_empty() {
        // Fallback: analyze everything
        return ChannelSelection {
            indices: (0..labels.len()).collect(),
            labels: labels.iter().map(|l| l.as_ref().to_string()).collect(),
            eeg_only: false,
        };
    }

    ChannelSelection {
        indices,
        labels: selected,
        eeg_only: true,
    }
}
