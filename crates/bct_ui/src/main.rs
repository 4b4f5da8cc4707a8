//! Broadcast Configuration Tool - Main entry point
//!
//! This is the application entry point using iced. It handles:
//! - Configuration loading
//! - Application-level logging initialization
//! - Header name loading
//! - Serial device discovery
//! - Application launch

use std::sync::Arc;

use anyhow::Context;
use iced::Size;
use parking_lot::Mutex;

use bct_core::config::{ConfigManager, DeviceSettings, DEFAULT_CONFIG_PATH};
use bct_core::device::{
    open_channel, DeviceChannel, PortEnumerator, PortOpener, SerialOpener, SystemPorts,
};
use bct_core::logging::init_tracing_with_file;
use bct_core::presets::{HeaderNames, PresetCatalog};
use bct_core::state::AppState;

mod app;
mod handlers;
mod theme;
mod views;

use app::{App, AppInit};

fn main() -> anyhow::Result<()> {
    // Load configuration first (needed for logs directory path)
    let mut config_manager = ConfigManager::new(DEFAULT_CONFIG_PATH);
    if let Err(e) = config_manager.load_or_create() {
        eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
    }
    if let Err(e) = config_manager.ensure_dirs_exist() {
        eprintln!("Warning: Failed to create logs folder: {}", e);
    }

    let settings = config_manager.settings().clone();
    let logs_dir = config_manager.logs_folder();
    let _log_guard = init_tracing_with_file(settings.logging.level, &logs_dir);

    tracing::info!("Broadcast Configuration Tool starting");
    tracing::info!("Config: {}", config_manager.path().display());
    tracing::info!("Core version: {}", bct_core::version());

    let catalog = PresetCatalog::builtin();
    let header_path = config_manager.header_path();
    let names = HeaderNames::load_or_fallback(&header_path, &catalog);

    let channel = connect_device(&settings.device, &SystemPorts, &SerialOpener)
        .context("Cannot start without a serial device")?;

    let version_info = format!(
        "Broadcast Configuration Tool started.\nCore version: {}\nHeader: {}\nLogs: {}",
        bct_core::version(),
        header_path.display(),
        logs_dir.display()
    );

    let init = AppInit {
        config: Arc::new(Mutex::new(config_manager)),
        state: AppState::new(catalog, names),
        channel: Arc::new(Mutex::new(channel)),
        version_info,
    };

    tracing::info!("Application initialized, starting iced event loop");

    iced::application(move || App::new(init.clone()), App::update, App::view)
        .title("Broadcast Configuration Tool")
        .window_size(Size::new(1000.0, 720.0))
        .run()?;

    Ok(())
}

/// Open the device channel unless disabled in the settings.
///
/// No serial port at all is fatal; several ports leave the app without a
/// device.
fn connect_device(
    device: &DeviceSettings,
    ports: &dyn PortEnumerator,
    opener: &dyn PortOpener,
) -> bct_core::Result<Option<DeviceChannel>> {
    if !device.connect_on_startup {
        tracing::info!("Device connection disabled in config");
        return Ok(None);
    }

    let channel = open_channel(ports, opener, device.baud_rate)
        .inspect_err(|e| tracing::error!("{}", e))?;
    Ok(channel)
}
