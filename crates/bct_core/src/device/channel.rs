//! Serial endpoint discovery and the write-only device channel.

use std::io::Write;
use std::time::Duration;

use thiserror::Error;

use super::commands::StartCommand;

/// Default line speed of the firmware shell.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// How long a write may wait for room in the tty buffer.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(100);

/// Errors from discovering, opening or writing to the device.
#[derive(Error, Debug)]
pub enum DeviceError {
    #[error("No serial ports found")]
    NoEndpoints,

    #[error("Failed to list serial ports: {0}")]
    Enumerate(#[source] serialport::Error),

    #[error("Failed to open {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Failed to write to {port}: {source}")]
    Write {
        port: String,
        #[source]
        source: std::io::Error,
    },
}

/// Lists candidate serial endpoints.
pub trait PortEnumerator {
    fn ports(&self) -> Result<Vec<String>, DeviceError>;
}

/// Opens an endpoint for writing.
pub trait PortOpener {
    fn open(&self, port: &str, baud_rate: u32) -> Result<Box<dyn Write + Send>, DeviceError>;
}

/// Ports reported by the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPorts;

impl PortEnumerator for SystemPorts {
    fn ports(&self) -> Result<Vec<String>, DeviceError> {
        let ports = serialport::available_ports().map_err(DeviceError::Enumerate)?;
        Ok(ports.into_iter().map(|p| p.port_name).collect())
    }
}

/// Opens real serial ports, 8N1 with `WRITE_TIMEOUT`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialOpener;

impl PortOpener for SerialOpener {
    fn open(&self, port: &str, baud_rate: u32) -> Result<Box<dyn Write + Send>, DeviceError> {
        let handle = serialport::new(port, baud_rate)
            .timeout(WRITE_TIMEOUT)
            .open()
            .map_err(|source| DeviceError::Open {
                port: port.to_string(),
                source,
            })?;
        Ok(Box::new(handle))
    }
}

/// An open connection to the device. Write-only; nothing is read back.
pub struct DeviceChannel {
    port_name: String,
    writer: Box<dyn Write + Send>,
}

impl std::fmt::Debug for DeviceChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceChannel")
            .field("port_name", &self.port_name)
            .finish_non_exhaustive()
    }
}

impl DeviceChannel {
    pub fn new(port_name: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            port_name: port_name.into(),
            writer,
        }
    }

    pub fn port_name(&self) -> &str {
        &self.port_name
    }

    /// Send the preset line followed by the start line.
    ///
    /// Fire-and-forget: there is no acknowledgement and nothing is retried.
    pub fn send_start(&mut self, command: &StartCommand) -> Result<(), DeviceError> {
        for cmd in command.commands() {
            let line = cmd.to_line();
            self.writer
                .write_all(line.as_bytes())
                .and_then(|_| self.writer.flush())
                .map_err(|source| DeviceError::Write {
                    port: self.port_name.clone(),
                    source,
                })?;
            tracing::info!("Sent to {}: {}", self.port_name, cmd);
        }
        Ok(())
    }
}

/// Discover endpoints and open the channel when exactly one exists.
///
/// Zero endpoints is an error. With more than one the choice would be a
/// guess, so a warning is logged and no channel is returned.
pub fn open_channel(
    enumerator: &dyn PortEnumerator,
    opener: &dyn PortOpener,
    baud_rate: u32,
) -> Result<Option<DeviceChannel>, DeviceError> {
    let ports = enumerator.ports()?;
    tracing::debug!("Serial ports: {:?}", ports);

    match ports.as_slice() {
        [] => Err(DeviceError::NoEndpoints),
        [port] => {
            let writer = opener.open(port, baud_rate)?;
            tracing::info!("Opened {} at {} baud", port, baud_rate);
            Ok(Some(DeviceChannel::new(port.clone(), writer)))
        }
        many => {
            tracing::warn!(
                "Found {} serial ports ({}); not opening any",
                many.len(),
                many.join(", ")
            );
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn writes_may_wait_for_the_tty() {
        // serialport applies the timeout to writes too; zero fails on a full buffer
        assert!(WRITE_TIMEOUT > Duration::ZERO);
        assert!(WRITE_TIMEOUT <= Duration::from_secs(1));
    }

    struct FixedPorts(Vec<&'static str>);

    impl PortEnumerator for FixedPorts {
        fn ports(&self) -> Result<Vec<String>, DeviceError> {
            Ok(self.0.iter().map(|p| p.to_string()).collect())
        }
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    struct RecordingOpener {
        buf: SharedBuf,
        opened: Mutex<Vec<(String, u32)>>,
    }

    impl RecordingOpener {
        fn new() -> Self {
            Self {
                buf: SharedBuf::default(),
                opened: Mutex::new(Vec::new()),
            }
        }
    }

    impl PortOpener for RecordingOpener {
        fn open(&self, port: &str, baud_rate: u32) -> Result<Box<dyn Write + Send>, DeviceError> {
            self.opened.lock().unwrap().push((port.to_string(), baud_rate));
            Ok(Box::new(self.buf.clone()))
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn no_ports_is_an_error() {
        let opener = RecordingOpener::new();
        let result = open_channel(&FixedPorts(vec![]), &opener, DEFAULT_BAUD_RATE);
        assert!(matches!(result, Err(DeviceError::NoEndpoints)));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn several_ports_open_nothing() {
        let opener = RecordingOpener::new();
        let result = open_channel(
            &FixedPorts(vec!["/dev/ttyACM0", "/dev/ttyACM1"]),
            &opener,
            DEFAULT_BAUD_RATE,
        );
        assert!(matches!(result, Ok(None)));
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn single_port_is_opened_at_baud_rate() {
        let opener = RecordingOpener::new();
        let channel = open_channel(&FixedPorts(vec!["/dev/ttyACM0"]), &opener, DEFAULT_BAUD_RATE)
            .unwrap()
            .unwrap();

        assert_eq!(channel.port_name(), "/dev/ttyACM0");
        assert_eq!(
            *opener.opened.lock().unwrap(),
            [("/dev/ttyACM0".to_string(), 115_200)]
        );
    }

    #[test]
    fn send_start_writes_both_lines_in_order() {
        let buf = SharedBuf::default();
        let mut channel = DeviceChannel::new("mock", Box::new(buf.clone()));

        channel.send_start(&StartCommand::new("16_2_1")).unwrap();

        let written = buf.0.lock().unwrap().clone();
        assert_eq!(written, b"bct preset 16_2_1 0 0\nbct start 0\n");
    }

    #[test]
    fn write_failure_names_the_port() {
        let mut channel = DeviceChannel::new("/dev/ttyUSB0", Box::new(BrokenPipe));
        let err = channel
            .send_start(&StartCommand::new("16_2_1"))
            .unwrap_err();
        assert!(err.to_string().starts_with("Failed to write to /dev/ttyUSB0"));
    }
}
