//! Crate-level error type.
//!
//! Each subsystem owns its own error enum; this wraps them so callers that
//! touch several subsystems can use a single `Result`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::device::DeviceError;
use crate::presets::HeaderError;
use crate::state::StateError;

/// Main error type for the core library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Header error: {0}")]
    Header(#[from] HeaderError),

    #[error("State error: {0}")]
    State(#[from] StateError),
}

/// Result type alias for the core library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_device_error_with_context() {
        let err: Error = DeviceError::NoEndpoints.into();
        assert_eq!(err.to_string(), "Device error: No serial ports found");
    }
}
