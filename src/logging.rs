//! File-based logging.
//!
//! Logs land in ~/.dockhand/logs/ as timestamped files, cleaned up on
//! startup according to the configured retention. The launcher host owns
//! stdout, so nothing is ever logged there.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, SystemTime};

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, LogSettings};

/// Returns the log directory path (~/.dockhand/logs/).
#[must_use]
pub fn log_directory() -> PathBuf {
    Config::data_dir().join("logs")
}

/// Returns the path for a new log file.
#[must_use]
pub fn current_log_path() -> PathBuf {
    let now = chrono::Local::now();
    let filename = format!("dockhand_{}.log", now.format("%Y-%m-%d_%H-%M-%S"));
    log_directory().join(filename)
}

/// Deletes log files older than the retention period.
///
/// Returns the number of files removed.
pub fn cleanup_old_logs(retention_hours: u32) -> io::Result<u32> {
    let log_dir = log_directory();

    if !log_dir.exists() {
        return Ok(0);
    }

    let retention = Duration::from_secs(u64::from(retention_hours) * 3600);
    let now = SystemTime::now();
    let mut deleted = 0;

    for entry in fs::read_dir(&log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if let Ok(modified) = metadata.modified() {
                if let Ok(age) = now.duration_since(modified) {
                    if age > retention && fs::remove_file(&path).is_ok() {
                        deleted += 1;
                    }
                }
            }
        }
    }

    Ok(deleted)
}

/// Initializes file logging from the configured settings.
pub fn init(settings: &LogSettings) -> io::Result<()> {
    if !settings.enabled || settings.level == "off" {
        return Ok(());
    }

    let log_dir = log_directory();
    fs::create_dir_all(&log_dir)?;

    let deleted = cleanup_old_logs(settings.retention_hours)?;

    let log_path = current_log_path();
    let log_file = File::create(&log_path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    let file_layer = fmt::layer()
        .with_writer(log_file.with_max_level(tracing::Level::TRACE))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!("dockhand logging initialized");
    tracing::info!("log file: {}", log_path.display());
    tracing::info!("log level: {}", settings.level);
    if deleted > 0 {
        tracing::info!("cleaned up {} old log file(s)", deleted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directory_under_data_dir() {
        let dir = log_directory();
        assert!(dir.to_string_lossy().contains(".dockhand"));
        assert!(dir.ends_with("logs"));
    }

    #[test]
    fn test_log_path_has_prefix_and_extension() {
        let path = current_log_path();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        assert!(name.starts_with("dockhand_"));
        assert!(name.ends_with(".log"));
    }
}
