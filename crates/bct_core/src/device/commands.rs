//! Text commands understood by the broadcast firmware shell.

use std::fmt;

use crate::models::NOT_SET;

/// Group index the start sequence targets.
pub const START_BIG_INDEX: u8 = 0;

/// Subgroup index the preset line targets.
pub const START_SUB_GROUP_INDEX: u8 = 0;

/// One line of the `bct` shell command set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    /// `bct preset <name> <big> <subgroup>`
    Preset {
        name: String,
        big: u8,
        sub_group: u8,
    },
    /// `bct start <big>`
    Start { big: u8 },
}

impl DeviceCommand {
    /// The command as it goes on the wire, newline terminated.
    pub fn to_line(&self) -> String {
        format!("{self}\n")
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceCommand::Preset {
                name,
                big,
                sub_group,
            } => write!(f, "bct preset {} {} {}", name, big, sub_group),
            DeviceCommand::Start { big } => write!(f, "bct start {}", big),
        }
    }
}

/// The two-line sequence that configures a preset and starts broadcasting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartCommand {
    preset: String,
}

impl StartCommand {
    pub fn new(preset: impl Into<String>) -> Self {
        Self {
            preset: preset.into(),
        }
    }

    pub fn preset(&self) -> &str {
        &self.preset
    }

    /// False while the preset is still the placeholder.
    pub fn is_ready(&self) -> bool {
        !self.preset.is_empty() && self.preset != NOT_SET
    }

    /// Commands in send order.
    pub fn commands(&self) -> [DeviceCommand; 2] {
        [
            DeviceCommand::Preset {
                name: self.preset.clone(),
                big: START_BIG_INDEX,
                sub_group: START_SUB_GROUP_INDEX,
            },
            DeviceCommand::Start {
                big: START_BIG_INDEX,
            },
        ]
    }
}
