//! Broadcast group and subgroup structures.

use serde::{Deserialize, Serialize};

use super::enums::{Framing, Packing};

/// Placeholder selection used by every dropdown before the user picks a value.
pub const NOT_SET: &str = "Not_set";

/// Preset dropdown entry that switches a group into editable parameters.
pub const CUSTOM: &str = "Custom";

/// Maximum broadcast code length in characters.
pub const BROADCAST_CODE_MAX_LEN: usize = 16;

/// Maximum subgroup language length in characters.
pub const LANGUAGE_MAX_LEN: usize = 3;

/// Language a new subgroup starts with.
pub const DEFAULT_LANGUAGE: &str = "-";

/// Subgroup count range.
pub const SUB_GROUPS_MIN: u8 = 0;
pub const SUB_GROUPS_MAX: u8 = 255;

/// BIS count range per subgroup.
pub const BISES_MIN: u8 = 1;
pub const BISES_MAX: u8 = 255;

/// SDU intervals selectable for a custom preset.
pub const SDU_INTERVAL_OPTIONS_US: [u32; 2] = [7500, 10000];

/// Retransmission count range for a custom preset.
pub const RTN_MIN: u8 = 0;
pub const RTN_MAX: u8 = 10;

/// Keep at most `max` characters of `value`.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Codec parameters of a preset. Groups keep their own copy for editing
/// while the selected preset is not a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PresetParams {
    pub sdu_interval_us: u32,
    pub framing: Framing,
    pub octets_per_sdu: u16,
    pub rtn: u8,
    pub max_transport_latency_ms: u16,
    pub presentation_delay_us: u32,
}

/// One subgroup of audio streams inside a broadcast group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubGroup {
    pub context: String,
    pub num_bises: u8,
    pub language: String,
    /// Reserved for per-BIS audio locations; not edited yet.
    pub bis_locations: Vec<String>,
}

impl Default for SubGroup {
    fn default() -> Self {
        Self {
            context: NOT_SET.to_string(),
            num_bises: BISES_MIN,
            language: DEFAULT_LANGUAGE.to_string(),
            bis_locations: Vec::new(),
        }
    }
}

/// A broadcast isochronous group as edited in the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BroadcastGroup {
    pub preset: String,
    pub num_sub_groups: u8,
    pub sub_groups: Vec<SubGroup>,
    pub packing: Packing,
    pub encryption: bool,
    pub broadcast_code: String,
    pub custom: PresetParams,
}

impl Default for BroadcastGroup {
    fn default() -> Self {
        Self {
            preset: NOT_SET.to_string(),
            num_sub_groups: SUB_GROUPS_MIN,
            sub_groups: Vec::new(),
            packing: Packing::default(),
            encryption: false,
            broadcast_code: String::new(),
            custom: PresetParams::default(),
        }
    }
}

impl BroadcastGroup {
    /// Append or remove a single subgroup to move one step toward the
    /// configured count. Returns false once the list already matches.
    pub fn step_sub_groups(&mut self) -> bool {
        let target = usize::from(self.num_sub_groups);
        if self.sub_groups.len() < target {
            self.sub_groups.push(SubGroup::default());
            true
        } else if self.sub_groups.len() > target {
            self.sub_groups.pop();
            true
        } else {
            false
        }
    }
}
