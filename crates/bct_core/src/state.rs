//! Application state: both broadcast groups and the change contract.
//!
//! All edits go through [`AppState::on_change`]. A change is validated
//! (text truncated, counts clamped), applied, and any derived updates run
//! before the call returns. The outcome carries the value that was actually
//! stored and which group tab, if any, must be rebuilt from scratch.

use thiserror::Error;

use crate::derivation::{custom_seed, is_custom, PresetView};
use crate::device::StartCommand;
use crate::models::{
    truncate_chars, BigId, BroadcastGroup, Framing, Packing, BISES_MAX, BISES_MIN,
    BROADCAST_CODE_MAX_LEN, LANGUAGE_MAX_LEN, RTN_MAX, RTN_MIN, SDU_INTERVAL_OPTIONS_US,
};
use crate::presets::{HeaderNames, PresetCatalog};

/// Errors for changes that can't be applied.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("{big} has no subgroup {index} (it has {len})")]
    SubGroupOutOfRange { big: BigId, index: usize, len: usize },

    #[error("{big} uses catalog preset {preset}; its parameters are read-only")]
    NotCustom { big: BigId, preset: String },

    #[error("Unsupported SDU interval: {0} us")]
    InvalidSduInterval(u32),
}

/// Group-level fields, edited from the Overview tab and the group tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupField {
    Preset(String),
    NumSubGroups(u8),
    Packing(Packing),
    Encryption(bool),
    BroadcastCode(String),
}

/// Per-subgroup fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubGroupField {
    Context(String),
    NumBises(u8),
    Language(String),
}

/// Preset parameters, editable only in custom mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomField {
    SduInterval(u32),
    Framing(Framing),
    OctetsPerSdu(u16),
    Rtn(u8),
    MaxTransportLatency(u16),
    PresentationDelay(u32),
}

/// A single field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldChange {
    Group {
        big: BigId,
        field: GroupField,
    },
    SubGroup {
        big: BigId,
        index: usize,
        field: SubGroupField,
    },
    Custom {
        big: BigId,
        field: CustomField,
    },
}

/// Result of an applied change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeOutcome {
    /// The change as stored, after truncation/clamping.
    pub value: FieldChange,
    /// Group tab whose content must be discarded and rebuilt.
    pub rebuild: Option<BigId>,
}

/// Process-wide editing state, created once at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    catalog: PresetCatalog,
    names: HeaderNames,
    groups: [BroadcastGroup; 2],
    generations: [u64; 2],
}

impl AppState {
    pub fn new(catalog: PresetCatalog, names: HeaderNames) -> Self {
        Self {
            catalog,
            names,
            groups: [BroadcastGroup::default(), BroadcastGroup::default()],
            generations: [0; 2],
        }
    }

    pub fn names(&self) -> &HeaderNames {
        &self.names
    }

    /// Swap in freshly loaded dropdown vocabularies. Both group tabs are
    /// rebuilt since their dropdowns change.
    pub fn set_names(&mut self, names: HeaderNames) {
        self.names = names;
        for big in BigId::ALL {
            self.bump_generation(big);
        }
    }

    pub fn group(&self, big: BigId) -> &BroadcastGroup {
        &self.groups[big.index()]
    }

    /// What the group's tab shows for its preset.
    pub fn preset_view(&self, big: BigId) -> PresetView {
        PresetView::for_group(&self.catalog, self.group(big))
    }

    /// Number of times the group's tab has been rebuilt.
    pub fn rebuild_generation(&self, big: BigId) -> u64 {
        self.generations[big.index()]
    }

    /// Command the start button sends. It always carries BIG0's preset.
    pub fn start_command(&self) -> StartCommand {
        StartCommand::new(&self.group(BigId::Big0).preset)
    }

    /// Validate and apply one field edit.
    pub fn on_change(&mut self, change: FieldChange) -> Result<ChangeOutcome, StateError> {
        let outcome = match change {
            FieldChange::Group { big, field } => self.apply_group(big, field),
            FieldChange::SubGroup { big, index, field } => self.apply_sub_group(big, index, field)?,
            FieldChange::Custom { big, field } => self.apply_custom(big, field)?,
        };

        if let Some(big) = outcome.rebuild {
            self.bump_generation(big);
        }
        tracing::debug!(change = ?outcome.value, rebuild = ?outcome.rebuild, "Applied change");
        Ok(outcome)
    }

    fn apply_group(&mut self, big: BigId, field: GroupField) -> ChangeOutcome {
        let catalog = self.catalog;
        let group = &mut self.groups[big.index()];

        let (stored, rebuild) = match field {
            GroupField::Preset(name) => {
                let was_custom = is_custom(&catalog, &group.preset);
                if !was_custom && is_custom(&catalog, &name) {
                    group.custom = custom_seed(&catalog);
                    tracing::debug!("{} entered custom mode", big);
                }
                group.preset = name.clone();
                (GroupField::Preset(name), true)
            }
            GroupField::NumSubGroups(count) => {
                group.num_sub_groups = count;
                while group.step_sub_groups() {
                    tracing::trace!("{} subgroups: {}", big, group.sub_groups.len());
                }
                (GroupField::NumSubGroups(count), true)
            }
            GroupField::Packing(packing) => {
                group.packing = packing;
                (GroupField::Packing(packing), false)
            }
            GroupField::Encryption(enabled) => {
                group.encryption = enabled;
                (GroupField::Encryption(enabled), false)
            }
            GroupField::BroadcastCode(code) => {
                let code = truncate_chars(&code, BROADCAST_CODE_MAX_LEN);
                group.broadcast_code = code.clone();
                (GroupField::BroadcastCode(code), false)
            }
        };

        ChangeOutcome {
            value: FieldChange::Group { big, field: stored },
            rebuild: rebuild.then_some(big),
        }
    }

    fn apply_sub_group(
        &mut self,
        big: BigId,
        index: usize,
        field: SubGroupField,
    ) -> Result<ChangeOutcome, StateError> {
        let group = &mut self.groups[big.index()];
        let len = group.sub_groups.len();
        let sub = group
            .sub_groups
            .get_mut(index)
            .ok_or(StateError::SubGroupOutOfRange { big, index, len })?;

        let stored = match field {
            SubGroupField::Context(context) => {
                sub.context = context.clone();
                SubGroupField::Context(context)
            }
            SubGroupField::NumBises(count) => {
                let count = count.clamp(BISES_MIN, BISES_MAX);
                sub.num_bises = count;
                SubGroupField::NumBises(count)
            }
            SubGroupField::Language(language) => {
                let language = truncate_chars(&language, LANGUAGE_MAX_LEN);
                sub.language = language.clone();
                SubGroupField::Language(language)
            }
        };

        Ok(ChangeOutcome {
            value: FieldChange::SubGroup {
                big,
                index,
                field: stored,
            },
            rebuild: None,
        })
    }

    fn apply_custom(&mut self, big: BigId, field: CustomField) -> Result<ChangeOutcome, StateError> {
        let catalog = self.catalog;
        let group = &mut self.groups[big.index()];
        if !is_custom(&catalog, &group.preset) {
            return Err(StateError::NotCustom {
                big,
                preset: group.preset.clone(),
            });
        }

        let params = &mut group.custom;
        let stored = match field {
            CustomField::SduInterval(us) => {
                if !SDU_INTERVAL_OPTIONS_US.contains(&us) {
                    return Err(StateError::InvalidSduInterval(us));
                }
                params.sdu_interval_us = us;
                CustomField::SduInterval(us)
            }
            CustomField::Framing(framing) => {
                params.framing = framing;
                CustomField::Framing(framing)
            }
            CustomField::OctetsPerSdu(octets) => {
                params.octets_per_sdu = octets;
                CustomField::OctetsPerSdu(octets)
            }
            CustomField::Rtn(rtn) => {
                let rtn = rtn.clamp(RTN_MIN, RTN_MAX);
                params.rtn = rtn;
                CustomField::Rtn(rtn)
            }
            CustomField::MaxTransportLatency(ms) => {
                params.max_transport_latency_ms = ms;
                CustomField::MaxTransportLatency(ms)
            }
            CustomField::PresentationDelay(us) => {
                params.presentation_delay_us = us;
                CustomField::PresentationDelay(us)
            }
        };

        Ok(ChangeOutcome {
            value: FieldChange::Custom { big, field: stored },
            rebuild: None,
        })
    }

    fn bump_generation(&mut self, big: BigId) {
        let generation = &mut self.generations[big.index()];
        *generation = generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CUSTOM, NOT_SET};

    fn state() -> AppState {
        let catalog = PresetCatalog::builtin();
        let names = HeaderNames::from_catalog(&catalog);
        AppState::new(catalog, names)
    }

    fn group_change(big: BigId, field: GroupField) -> FieldChange {
        FieldChange::Group { big, field }
    }

    #[test]
    fn starts_with_two_default_groups() {
        let state = state();
        assert!(!state.start_command().is_ready());
        for big in BigId::ALL {
            assert_eq!(state.group(big).preset, NOT_SET);
            assert_eq!(state.rebuild_generation(big), 0);
        }
    }

    #[test]
    fn sub_group_count_tracks_every_value() {
        let mut state = state();
        for n in [3u8, 255, 0, 7, 6, 0] {
            state
                .on_change(group_change(BigId::Big1, GroupField::NumSubGroups(n)))
                .unwrap();
            let group = state.group(BigId::Big1);
            assert_eq!(group.sub_groups.len(), usize::from(n));
            assert_eq!(group.num_sub_groups, n);
        }
        assert!(state.group(BigId::Big0).sub_groups.is_empty());
    }

    #[test]
    fn shrinking_keeps_leading_subgroups() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big0, GroupField::NumSubGroups(3)))
            .unwrap();
        state
            .on_change(FieldChange::SubGroup {
                big: BigId::Big0,
                index: 0,
                field: SubGroupField::Language("eng".into()),
            })
            .unwrap();
        state
            .on_change(group_change(BigId::Big0, GroupField::NumSubGroups(1)))
            .unwrap();

        assert_eq!(state.group(BigId::Big0).sub_groups[0].language, "eng");
    }

    #[test]
    fn broadcast_code_is_truncated_to_16() {
        let mut state = state();
        let outcome = state
            .on_change(group_change(
                BigId::Big0,
                GroupField::BroadcastCode("0123456789abcdefXYZ".into()),
            ))
            .unwrap();

        assert_eq!(state.group(BigId::Big0).broadcast_code, "0123456789abcdef");
        assert_eq!(
            outcome.value,
            group_change(BigId::Big0, GroupField::BroadcastCode("0123456789abcdef".into()))
        );
        assert_eq!(outcome.rebuild, None);
    }

    #[test]
    fn language_is_truncated_to_3() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big0, GroupField::NumSubGroups(1)))
            .unwrap();
        state
            .on_change(FieldChange::SubGroup {
                big: BigId::Big0,
                index: 0,
                field: SubGroupField::Language("english".into()),
            })
            .unwrap();

        assert_eq!(state.group(BigId::Big0).sub_groups[0].language, "eng");
    }

    #[test]
    fn bis_count_is_clamped_to_one() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big0, GroupField::NumSubGroups(1)))
            .unwrap();
        let outcome = state
            .on_change(FieldChange::SubGroup {
                big: BigId::Big0,
                index: 0,
                field: SubGroupField::NumBises(0),
            })
            .unwrap();

        assert_eq!(state.group(BigId::Big0).sub_groups[0].num_bises, 1);
        assert!(matches!(
            outcome.value,
            FieldChange::SubGroup { field: SubGroupField::NumBises(1), .. }
        ));
    }

    #[test]
    fn sub_group_out_of_range_is_rejected() {
        let mut state = state();
        let err = state
            .on_change(FieldChange::SubGroup {
                big: BigId::Big1,
                index: 0,
                field: SubGroupField::Context("Media".into()),
            })
            .unwrap_err();

        assert_eq!(
            err,
            StateError::SubGroupOutOfRange {
                big: BigId::Big1,
                index: 0,
                len: 0
            }
        );
    }

    #[test]
    fn only_preset_and_count_rebuild_the_tab() {
        let mut state = state();
        let big = BigId::Big0;

        let outcome = state
            .on_change(group_change(big, GroupField::Preset("16_2_1".into())))
            .unwrap();
        assert_eq!(outcome.rebuild, Some(big));
        assert_eq!(state.rebuild_generation(big), 1);

        state
            .on_change(group_change(big, GroupField::NumSubGroups(2)))
            .unwrap();
        assert_eq!(state.rebuild_generation(big), 2);

        state
            .on_change(group_change(big, GroupField::Packing(Packing::Interleaved)))
            .unwrap();
        state
            .on_change(group_change(big, GroupField::Encryption(true)))
            .unwrap();
        assert_eq!(state.rebuild_generation(big), 2);
        assert_eq!(state.rebuild_generation(BigId::Big1), 0);
    }

    #[test]
    fn catalog_preset_is_not_custom() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big0, GroupField::Preset("16_2_1".into())))
            .unwrap();

        let view = state.preset_view(BigId::Big0);
        assert!(!view.custom);
        assert_eq!(view.bitrate_kbps, 32.0);

        let err = state
            .on_change(FieldChange::Custom {
                big: BigId::Big0,
                field: CustomField::OctetsPerSdu(10),
            })
            .unwrap_err();
        assert!(matches!(err, StateError::NotCustom { .. }));
    }

    #[test]
    fn custom_is_seeded_from_last_catalog_entry() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big0, GroupField::Preset("16_2_1".into())))
            .unwrap();
        state
            .on_change(group_change(BigId::Big0, GroupField::Preset(CUSTOM.into())))
            .unwrap();

        let view = state.preset_view(BigId::Big0);
        assert!(view.custom);
        assert_eq!(view.params.octets_per_sdu, 155);
        assert_eq!(view.params.sdu_interval_us, 10000);
        assert_eq!(view.bitrate_kbps, 124.0);
    }

    #[test]
    fn custom_edits_survive_switching_between_custom_names() {
        let mut state = state();
        let big = BigId::Big1;
        state
            .on_change(group_change(big, GroupField::Preset(CUSTOM.into())))
            .unwrap();
        state
            .on_change(FieldChange::Custom {
                big,
                field: CustomField::OctetsPerSdu(60),
            })
            .unwrap();
        state
            .on_change(FieldChange::Custom {
                big,
                field: CustomField::SduInterval(7500),
            })
            .unwrap();

        state
            .on_change(group_change(big, GroupField::Preset("vendor_x".into())))
            .unwrap();

        let view = state.preset_view(big);
        assert!(view.custom);
        assert_eq!(view.params.octets_per_sdu, 60);
        assert_eq!(view.bitrate_kbps, 64.0);
    }

    #[test]
    fn custom_rtn_is_clamped_and_interval_validated() {
        let mut state = state();
        let big = BigId::Big0;
        state
            .on_change(group_change(big, GroupField::Preset(CUSTOM.into())))
            .unwrap();

        state
            .on_change(FieldChange::Custom {
                big,
                field: CustomField::Rtn(42),
            })
            .unwrap();
        assert_eq!(state.group(big).custom.rtn, 10);

        let err = state
            .on_change(FieldChange::Custom {
                big,
                field: CustomField::SduInterval(5000),
            })
            .unwrap_err();
        assert_eq!(err, StateError::InvalidSduInterval(5000));
    }

    #[test]
    fn start_command_carries_big0_preset() {
        let mut state = state();
        state
            .on_change(group_change(BigId::Big1, GroupField::Preset("48_2_1".into())))
            .unwrap();
        state
            .on_change(group_change(BigId::Big0, GroupField::Preset("16_2_1".into())))
            .unwrap();
        assert_eq!(state.start_command().preset(), "16_2_1");
    }

    #[test]
    fn new_names_rebuild_both_tabs() {
        let mut state = state();
        state.set_names(HeaderNames::from_text(""));
        assert_eq!(state.names().presets, [NOT_SET, CUSTOM]);
        assert_eq!(state.rebuild_generation(BigId::Big0), 1);
        assert_eq!(state.rebuild_generation(BigId::Big1), 1);
    }
}
