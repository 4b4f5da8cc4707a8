//! Header file browsing handlers.

use std::path::PathBuf;

use iced::Task;

use bct_core::config::ConfigSection;
use bct_core::logging::LogLevel;
use bct_core::presets::HeaderNames;

use crate::app::{App, Message};

impl App {
    /// Browse for a `structures.h` to read dropdown names from.
    pub fn browse_header(&self) -> Task<Message> {
        Task::perform(
            async {
                rfd::AsyncFileDialog::new()
                    .set_title("Select structures.h")
                    .add_filter("C Headers", &["h"])
                    .add_filter("All Files", &["*"])
                    .pick_file()
                    .await
                    .map(|f| f.path().to_path_buf())
            },
            Message::HeaderSelected,
        )
    }

    /// Load names from the chosen header and remember its path.
    pub fn handle_header_selected(&mut self, path: Option<PathBuf>) {
        let Some(path) = path else {
            return;
        };

        let names = match HeaderNames::load(&path) {
            Ok(names) => names,
            Err(e) => {
                self.append_log(LogLevel::Warn, &e.to_string());
                return;
            }
        };

        self.append_log(
            LogLevel::Info,
            &format!(
                "Loaded {} presets, {} contexts from {}",
                names.presets.len(),
                names.contexts.len(),
                path.display()
            ),
        );
        self.state.set_names(names);

        let save_result = {
            let mut cfg = self.config.lock();
            cfg.settings_mut().paths.structures_header = path.to_string_lossy().to_string();
            cfg.update_section(ConfigSection::Paths)
        };
        if let Err(e) = save_result {
            self.append_log(LogLevel::Warn, &format!("Failed to save header path: {}", e));
        }
    }

    /// Header path currently configured.
    pub fn header_path(&self) -> String {
        self.config.lock().settings().paths.structures_header.clone()
    }
}
