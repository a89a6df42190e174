//! Logging configuration using the tracing ecosystem.
//!
//! Logs go to daily rotating files so they never corrupt the TUI. The level
//! is set through `RUST_LOG`.

use std::path::PathBuf;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Default log filter if `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "widgetry=info,warn";

/// Log file name prefix.
const LOG_FILE_NAME: &str = "widgetry.log";

/// Initialize the logging system.
///
/// Logs are stored in the platform local data directory:
/// - Linux: `~/.local/share/widgetry/logs/`
/// - macOS: `~/Library/Application Support/widgetry/logs/`
/// - Windows: `C:\Users\<User>\AppData\Local\widgetry\logs\`
///
/// Set `RUST_LOG=widgetry=debug` for sort and selection transitions, or
/// `RUST_LOG=widgetry=trace` for every key event.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or created,
/// or if a global subscriber is already set.
pub fn init() -> anyhow::Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter);

    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Widgetry starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Get the log directory path.
fn get_log_directory() -> anyhow::Result<PathBuf> {
    let base_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(base_dir.join("widgetry").join("logs"))
}

/// Get the path where logs are stored, for display to users.
pub fn log_directory() -> Option<PathBuf> {
    get_log_directory().ok()
}

/// Log application shutdown.
pub fn shutdown() {
    tracing::info!("Widgetry shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_has_expected_structure() {
        if let Some(dir) = log_directory() {
            assert!(dir.ends_with("widgetry/logs"));
        }
    }

    #[test]
    fn test_default_filter_targets_crate() {
        assert!(DEFAULT_LOG_FILTER.starts_with("widgetry="));
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
