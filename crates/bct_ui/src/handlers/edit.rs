//! Field edit handlers.

use bct_core::logging::LogLevel;
use bct_core::state::{FieldChange, GroupField};

use crate::app::App;

impl App {
    /// Route an edit through the state model.
    ///
    /// Rejected edits are logged and leave the state untouched.
    pub fn handle_edit(&mut self, change: FieldChange) {
        let outcome = match self.state.on_change(change) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.append_log(LogLevel::Warn, &e.to_string());
                return;
            }
        };

        if let FieldChange::Group { big, field } = &outcome.value {
            match field {
                GroupField::Preset(name) => {
                    let view = self.state.preset_view(*big);
                    let mode = if view.custom { "custom" } else { "catalog" };
                    self.append_log(
                        LogLevel::Info,
                        &format!("{} preset: {} ({})", big, name, mode),
                    );
                }
                GroupField::NumSubGroups(count) => {
                    self.append_log(LogLevel::Info, &format!("{} subgroups: {}", big, count));
                }
                _ => {}
            }
        }

        if let Some(big) = outcome.rebuild {
            tracing::debug!(
                "Rebuilding {} tab (generation {})",
                big,
                self.state.rebuild_generation(big)
            );
        }
    }
}
