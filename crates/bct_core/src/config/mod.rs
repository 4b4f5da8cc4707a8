//! Configuration management for the Broadcast Configuration Tool.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Section-level updates (only changed section is modified)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use bct_core::config::{ConfigManager, ConfigSection};
//!
//! let mut config = ConfigManager::new(".config/bct.toml");
//! config.load_or_create().unwrap();
//!
//! println!("Header: {}", config.settings().paths.structures_header);
//!
//! config.settings_mut().paths.structures_header = "fw/structures.h".into();
//! config.update_section(ConfigSection::Paths).unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, DeviceSettings, LoggingSettings, PathSettings, Settings};

/// Config file location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".config/bct.toml";
