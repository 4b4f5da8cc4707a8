//! Logging infrastructure for the Broadcast Configuration Tool.
//!
//! All code logs through `tracing`. The binary installs one subscriber at
//! startup writing to stderr and to a daily log file in the logs folder.

mod types;

pub use types::LogLevel;

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name prefix for the daily log files.
pub const LOG_FILE_PREFIX: &str = "bct.log";

/// Initialize global tracing with stderr output plus a daily rolling file
/// in `logs_dir`. `RUST_LOG` takes precedence over `default_level`.
///
/// The returned guard flushes the file writer on drop, so keep it alive
/// until the process exits. Should be called once at application startup.
pub fn init_tracing_with_file(default_level: LogLevel, logs_dir: &Path) -> WorkerGuard {
    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(false))
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(build_filter(default_level))
        .init();

    guard
}

/// Initialize tracing for tests (only logs warnings and above).
#[cfg(test)]
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

fn build_filter(default_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.as_filter_str()))
}
