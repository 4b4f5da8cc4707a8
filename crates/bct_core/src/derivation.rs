//! Values derived from a group's preset selection.
//!
//! A group whose preset name is in the catalog shows that preset's
//! parameters read-only. Any other name (`"Custom"`, or a header name the
//! catalog doesn't know) makes every parameter editable, backed by the
//! group's own [`PresetParams`]. Bitrate is always computed from the
//! displayed parameters and never read from the catalog.

use crate::models::{BroadcastGroup, PresetParams};
use crate::presets::PresetCatalog;

/// Bitrate in kbps for `octets_per_sdu` bytes every `sdu_interval_us`,
/// rounded to 3 decimals. A zero interval gives 0.
pub fn bitrate_kbps(octets_per_sdu: u16, sdu_interval_us: u32) -> f64 {
    if sdu_interval_us == 0 {
        return 0.0;
    }
    let raw = f64::from(octets_per_sdu) * 8.0 / (f64::from(sdu_interval_us) / 1000.0);
    (raw * 1000.0).round() / 1000.0
}

/// True when `name` has no catalog entry and the group's parameters are
/// editable.
pub fn is_custom(catalog: &PresetCatalog, name: &str) -> bool {
    catalog.lookup(name).is_none()
}

/// Parameters a group starts from when it enters custom mode.
///
/// This is the catalog's last entry: the preset lookup scans the whole table
/// on a miss and the editable fields pick up whatever it ended on. Kept as-is
/// until the intended seed is decided.
pub fn custom_seed(catalog: &PresetCatalog) -> PresetParams {
    catalog.last().map(PresetParams::from).unwrap_or_default()
}

/// What a group tab shows for the selected preset.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetView {
    pub name: String,
    /// Parameters are editable (no catalog match).
    pub custom: bool,
    pub params: PresetParams,
    pub bitrate_kbps: f64,
}

impl PresetView {
    pub fn for_group(catalog: &PresetCatalog, group: &BroadcastGroup) -> Self {
        let (custom, params) = match catalog.lookup(&group.preset) {
            Some(preset) => (false, PresetParams::from(preset)),
            None => (true, group.custom),
        };

        Self {
            name: group.preset.clone(),
            custom,
            params,
            bitrate_kbps: bitrate_kbps(params.octets_per_sdu, params.sdu_interval_us),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Framing, CUSTOM};

    #[test]
    fn bitrate_matches_formula_for_every_preset() {
        let catalog = PresetCatalog::builtin();
        for p in catalog.entries().iter().filter(|p| p.sdu_interval_us > 0) {
            let raw = f64::from(p.octets_per_sdu) * 8.0 / (f64::from(p.sdu_interval_us) / 1000.0);
            let expected: f64 = format!("{:.3}", raw).parse().unwrap();
            let got = bitrate_kbps(p.octets_per_sdu, p.sdu_interval_us);
            assert!((got - expected).abs() < 1e-9, "{}: {} != {}", p.name, got, expected);
        }
    }

    #[test]
    fn bitrate_known_values() {
        assert_eq!(bitrate_kbps(26, 7500), 27.733);
        assert_eq!(bitrate_kbps(40, 10000), 32.0);
        assert_eq!(bitrate_kbps(117, 7500), 124.8);
        assert_eq!(bitrate_kbps(155, 10000), 124.0);
    }

    #[test]
    fn zero_interval_gives_zero_bitrate() {
        assert_eq!(bitrate_kbps(0, 0), 0.0);
        assert_eq!(bitrate_kbps(120, 0), 0.0);
    }

    #[test]
    fn catalog_preset_is_read_only() {
        let catalog = PresetCatalog::builtin();
        let group = BroadcastGroup {
            preset: "24_2_1".to_string(),
            ..Default::default()
        };

        let view = PresetView::for_group(&catalog, &group);
        assert!(!view.custom);
        assert_eq!(view.params.octets_per_sdu, 60);
        assert_eq!(view.bitrate_kbps, 48.0);
    }

    #[test]
    fn not_set_is_a_catalog_entry() {
        let catalog = PresetCatalog::builtin();
        let view = PresetView::for_group(&catalog, &BroadcastGroup::default());
        assert!(!view.custom);
        assert_eq!(view.bitrate_kbps, 0.0);
    }

    #[test]
    fn unknown_preset_uses_group_params() {
        let catalog = PresetCatalog::builtin();
        let group = BroadcastGroup {
            preset: CUSTOM.to_string(),
            custom: PresetParams {
                sdu_interval_us: 10000,
                framing: Framing::Framed,
                octets_per_sdu: 100,
                rtn: 3,
                max_transport_latency_ms: 20,
                presentation_delay_us: 25_000,
            },
            ..Default::default()
        };

        let view = PresetView::for_group(&catalog, &group);
        assert!(view.custom);
        assert_eq!(view.params.framing, Framing::Framed);
        assert_eq!(view.bitrate_kbps, 80.0);
    }

    #[test]
    fn seed_is_last_catalog_entry() {
        let catalog = PresetCatalog::builtin();
        let seed = custom_seed(&catalog);
        assert_eq!(seed.octets_per_sdu, 155);
        assert_eq!(seed.max_transport_latency_ms, 65);
        assert!(is_custom(&catalog, CUSTOM));
        assert!(!is_custom(&catalog, "16_2_1"));
    }
}
