//! Static BAP preset catalog.

use crate::models::{Framing, PresetParams};

/// A named bundle of codec/transport parameters from the Basic Audio Profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BapPreset {
    pub name: &'static str,
    pub sdu_interval_us: u32,
    pub framing: Framing,
    pub octets_per_sdu: u16,
    /// Reference bitrate as published with the preset. Display code derives
    /// the bitrate instead; see [`crate::derivation::bitrate_kbps`].
    pub bitrate_kbps: f64,
    pub rtn: u8,
    pub max_transport_latency_ms: u16,
    pub presentation_delay_us: u32,
}

const fn preset(
    name: &'static str,
    sdu_interval_us: u32,
    octets_per_sdu: u16,
    bitrate_kbps: f64,
    rtn: u8,
    max_transport_latency_ms: u16,
) -> BapPreset {
    BapPreset {
        name,
        sdu_interval_us,
        framing: Framing::Unframed,
        octets_per_sdu,
        bitrate_kbps,
        rtn,
        max_transport_latency_ms,
        presentation_delay_us: 40_000,
    }
}

static BUILTIN: [BapPreset; 29] = [
    BapPreset {
        name: "Not_set",
        sdu_interval_us: 0,
        framing: Framing::Unframed,
        octets_per_sdu: 0,
        bitrate_kbps: 0.0,
        rtn: 0,
        max_transport_latency_ms: 0,
        presentation_delay_us: 0,
    },
    preset("8_1_1", 7500, 26, 27.734, 2, 8),
    preset("8_1_2", 7500, 26, 27.734, 4, 45),
    preset("8_2_1", 10000, 30, 24.0, 2, 10),
    preset("8_2_2", 10000, 30, 24.0, 4, 60),
    preset("16_1_1", 7500, 30, 32.0, 2, 8),
    preset("16_1_2", 7500, 30, 32.0, 4, 45),
    preset("16_2_1", 10000, 40, 32.0, 2, 10),
    preset("16_2_2", 10000, 40, 32.0, 4, 60),
    preset("24_1_1", 7500, 45, 48.0, 2, 8),
    preset("24_1_2", 7500, 45, 48.0, 4, 45),
    preset("24_2_1", 10000, 60, 48.0, 2, 10),
    preset("24_2_2", 10000, 60, 48.0, 4, 60),
    preset("32_1_1", 7500, 60, 64.0, 2, 8),
    preset("32_1_2", 7500, 60, 64.0, 4, 45),
    preset("32_2_1", 10000, 80, 64.0, 2, 10),
    preset("32_2_2", 10000, 80, 64.0, 4, 60),
    preset("48_1_1", 7500, 75, 80.0, 4, 15),
    preset("48_1_2", 7500, 75, 80.0, 4, 50),
    preset("48_2_1", 10000, 100, 80.0, 4, 20),
    preset("48_2_2", 10000, 100, 80.0, 4, 65),
    preset("48_3_1", 7500, 90, 96.0, 4, 15),
    preset("48_3_2", 7500, 90, 96.0, 4, 50),
    preset("48_4_1", 10000, 120, 96.0, 4, 20),
    preset("48_4_2", 10000, 120, 96.0, 4, 65),
    preset("48_5_1", 7500, 117, 124.8, 4, 15),
    preset("48_5_2", 7500, 117, 124.8, 4, 50),
    preset("48_6_1", 10000, 155, 124.0, 4, 20),
    preset("48_6_2", 10000, 155, 124.0, 4, 65),
];

/// Immutable lookup table of BAP presets.
#[derive(Debug, Clone, Copy)]
pub struct PresetCatalog {
    entries: &'static [BapPreset],
}

impl PresetCatalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self { entries: &BUILTIN }
    }

    /// Find a preset by exact name. A miss is not an error: the caller
    /// treats it as a custom preset.
    pub fn lookup(&self, name: &str) -> Option<&'static BapPreset> {
        self.entries.iter().find(|p| p.name == name)
    }

    /// All entries in catalog order.
    pub fn entries(&self) -> &'static [BapPreset] {
        self.entries
    }

    /// Names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|p| p.name)
    }

    /// Final catalog entry.
    pub fn last(&self) -> Option<&'static BapPreset> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<&BapPreset> for PresetParams {
    fn from(preset: &BapPreset) -> Self {
        Self {
            sdu_interval_us: preset.sdu_interval_us,
            framing: preset.framing,
            octets_per_sdu: preset.octets_per_sdu,
            rtn: preset.rtn,
            max_transport_latency_ms: preset.max_transport_latency_ms,
            presentation_delay_us: preset.presentation_delay_us,
        }
    }
}
