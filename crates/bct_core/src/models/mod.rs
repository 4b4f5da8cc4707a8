//! Data models for the Broadcast Configuration Tool.
//!
//! - Enums for group identity, packing and framing
//! - Broadcast group / subgroup structures and their field limits

mod broadcast;
mod enums;

pub use broadcast::{
    truncate_chars, BroadcastGroup, PresetParams, SubGroup, BISES_MAX, BISES_MIN,
    BROADCAST_CODE_MAX_LEN, CUSTOM, DEFAULT_LANGUAGE, LANGUAGE_MAX_LEN, NOT_SET, RTN_MAX,
    RTN_MIN, SDU_INTERVAL_OPTIONS_US, SUB_GROUPS_MAX, SUB_GROUPS_MIN,
};
pub use enums::{BigId, Framing, Packing};
