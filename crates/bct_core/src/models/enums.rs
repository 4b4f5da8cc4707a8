//! Core enums used throughout the application.

use serde::{Deserialize, Serialize};

/// Identifies one of the two broadcast isochronous groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BigId {
    Big0,
    Big1,
}

impl BigId {
    /// Both groups, in tab order.
    pub const ALL: [BigId; 2] = [BigId::Big0, BigId::Big1];

    /// Zero-based group index.
    pub fn index(self) -> usize {
        match self {
            BigId::Big0 => 0,
            BigId::Big1 => 1,
        }
    }
}

impl std::fmt::Display for BigId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BigId::Big0 => write!(f, "BIG0"),
            BigId::Big1 => write!(f, "BIG1"),
        }
    }
}

/// Stream interleaving mode within a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Packing {
    #[default]
    Sequential,
    Interleaved,
}

impl Packing {
    pub const ALL: [Packing; 2] = [Packing::Sequential, Packing::Interleaved];
}

impl std::fmt::Display for Packing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Packing::Sequential => write!(f, "Sequential"),
            Packing::Interleaved => write!(f, "Interleaved"),
        }
    }
}

/// SDU framing of a BAP preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framing {
    #[default]
    Unframed,
    Framed,
}

impl Framing {
    pub const ALL: [Framing; 2] = [Framing::Unframed, Framing::Framed];
}

impl std::fmt::Display for Framing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Framing::Unframed => write!(f, "unframed"),
            Framing::Framed => write!(f, "framed"),
        }
    }
}
