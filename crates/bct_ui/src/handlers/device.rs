//! Device handlers: the start command and the status line.

use bct_core::logging::LogLevel;

use crate::app::App;

impl App {
    /// Send BIG0's preset and the start command to the device.
    pub fn start_broadcast(&mut self) {
        let command = self.state.start_command();
        if !command.is_ready() {
            self.append_log(
                LogLevel::Warn,
                "Select a preset for BIG0 before starting the broadcast",
            );
            return;
        }

        let result = self
            .channel
            .lock()
            .as_mut()
            .map(|channel| channel.send_start(&command));

        match result {
            None => self.append_log(
                LogLevel::Warn,
                "No device connected; start command not sent",
            ),
            Some(Ok(())) => self.append_log(
                LogLevel::Info,
                &format!("Broadcast started with preset {}", command.preset()),
            ),
            Some(Err(e)) => self.append_log(LogLevel::Error, &e.to_string()),
        }
    }

    /// Port name of the open channel, if any.
    pub fn device_port(&self) -> Option<String> {
        self.channel
            .lock()
            .as_ref()
            .map(|channel| channel.port_name().to_string())
    }
}
