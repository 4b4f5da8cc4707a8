//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level updates.

use serde::{Deserialize, Serialize};

use crate::device::DEFAULT_BAUD_RATE;
use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Header and log locations.
    #[serde(default)]
    pub paths: PathSettings,

    /// Serial device settings.
    #[serde(default)]
    pub device: DeviceSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// File locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSettings {
    /// Firmware header the dropdown names are read from.
    #[serde(default = "default_structures_header")]
    pub structures_header: String,

    /// Folder for log files.
    #[serde(default = "default_logs_folder")]
    pub logs_folder: String,
}

fn default_structures_header() -> String {
    "../include/structures.h".to_string()
}

fn default_logs_folder() -> String {
    ".logs".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            structures_header: default_structures_header(),
            logs_folder: default_logs_folder(),
        }
    }
}

/// Serial device settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceSettings {
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,

    /// Discover and open the device before the window appears.
    #[serde(default = "default_true")]
    pub connect_on_startup: bool,
}

fn default_baud_rate() -> u32 {
    DEFAULT_BAUD_RATE
}

fn default_true() -> bool {
    true
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            baud_rate: default_baud_rate(),
            connect_on_startup: true,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level; `RUST_LOG` overrides it.
    #[serde(default)]
    pub level: LogLevel,
}

/// Config sections for targeted updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Paths,
    Device,
    Logging,
}

impl ConfigSection {
    pub const ALL: [ConfigSection; 3] = [Self::Paths, Self::Device, Self::Logging];

    /// Get the TOML table name for this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Paths => "paths",
            ConfigSection::Device => "device",
            ConfigSection::Logging => "logging",
        }
    }
}
