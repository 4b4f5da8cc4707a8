//! BCT Core - Backend logic for the Broadcast Configuration Tool
//!
//! This crate holds the broadcast group model, the BAP preset catalog,
//! the derived preset parameters and the serial device channel. It has
//! zero UI dependencies.

pub mod config;
pub mod derivation;
pub mod device;
pub mod error;
pub mod logging;
pub mod models;
pub mod presets;
pub mod state;

pub use error::{Error, Result};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
