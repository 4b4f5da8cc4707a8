//! Device channel: serial discovery, opening and the start command.

mod channel;
mod commands;

pub use channel::{
    open_channel, DeviceChannel, DeviceError, PortEnumerator, PortOpener, SerialOpener,
    SystemPorts, DEFAULT_BAUD_RATE,
};
pub use commands::{DeviceCommand, StartCommand, START_BIG_INDEX, START_SUB_GROUP_INDEX};
