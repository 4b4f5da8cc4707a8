//! Main application module for the Broadcast Configuration Tool.
//!
//! Holds the application state, the message type and the top-level
//! update/view functions. Message handling lives in `handlers`, tab content
//! in `views`.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Local;
use iced::{Element, Length, Task};
use iced_aw::{TabLabel, Tabs};
use parking_lot::Mutex;

use bct_core::config::ConfigManager;
use bct_core::device::DeviceChannel;
use bct_core::logging::LogLevel;
use bct_core::models::BigId;
use bct_core::state::{AppState, FieldChange};

use crate::views;

/// Initialization data for the App.
#[derive(Clone)]
pub struct AppInit {
    pub config: Arc<Mutex<ConfigManager>>,
    pub state: AppState,
    pub channel: Arc<Mutex<Option<DeviceChannel>>>,
    pub version_info: String,
}

/// Tabs of the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Overview,
    Group(BigId),
}

impl TabId {
    pub fn label(&self) -> String {
        match self {
            TabId::Overview => "Overview".to_string(),
            TabId::Group(big) => big.to_string(),
        }
    }
}

/// All possible messages the application can receive.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(TabId),

    /// Any edit of a group, subgroup or custom preset field.
    Edit(FieldChange),

    StartBroadcast,

    BrowseHeader,
    HeaderSelected(Option<PathBuf>),
}

/// Main application state.
pub struct App {
    pub config: Arc<Mutex<ConfigManager>>,
    pub state: AppState,
    pub channel: Arc<Mutex<Option<DeviceChannel>>>,
    pub active_tab: TabId,
    pub log_lines: Vec<String>,
}

impl App {
    pub fn new(init: AppInit) -> Self {
        let mut app = Self {
            config: init.config,
            state: init.state,
            channel: init.channel,
            active_tab: TabId::Overview,
            log_lines: Vec::new(),
        };
        for line in init.version_info.lines() {
            app.log_lines.push(line.to_string());
        }
        app
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.active_tab = tab;
                Task::none()
            }
            Message::Edit(change) => {
                self.handle_edit(change);
                Task::none()
            }
            Message::StartBroadcast => {
                self.start_broadcast();
                Task::none()
            }
            Message::BrowseHeader => self.browse_header(),
            Message::HeaderSelected(path) => {
                self.handle_header_selected(path);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut tabs = Tabs::new(Message::TabSelected).push(
            TabId::Overview,
            TabLabel::Text(TabId::Overview.label()),
            views::overview::view(self),
        );

        for big in BigId::ALL {
            let tab = TabId::Group(big);
            tabs = tabs.push(tab, TabLabel::Text(tab.label()), views::group_tab::view(self, big));
        }

        tabs.set_active_tab(&self.active_tab)
            .height(Length::Fill)
            .into()
    }

    /// Add a line to the session log and forward it to tracing.
    pub fn append_log(&mut self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Trace => tracing::trace!("{}", message),
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        self.log_lines
            .push(format!("{} - {} - {}", timestamp, level, message));
    }
}
