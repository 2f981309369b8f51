//! Configuration for dockhand.
//!
//! Loads ~/.dockhand/config.toml and writes a commented default file on
//! first run. A missing or unreadable file falls back to defaults so the
//! plugin always starts.

mod keywords;

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use keywords::{KeywordId, Keywords};

/// Default config file content, written on first run.
const DEFAULT_CONFIG: &str = r#"# dockhand configuration
# ======================
# This file is read on plugin startup.

# Trigger words
# -------------
# Map each logical keyword to the word you type in the search box.
[keywords]
info = "dki"            # Docker daemon information
prune = "dkprune"       # docker system prune -a -f
documentation = "dkdocs"  # Search docs.docker.com
containers = "dk"       # List running containers

# Terminal
# --------
# Terminal emulator used for container shells and log streams.
# Known flag conventions: xfce4-terminal/terminator (-x), kitty (--),
# everything else (-e).
default_terminal = "gnome-terminal"

# Logging
# -------
# Logs are stored in ~/.dockhand/logs/ with automatic cleanup.
[log]
enabled = true
level = "info"          # trace, debug, info, warn, error, off
retention_hours = 24
"#;

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Whether file logging is enabled.
    pub enabled: bool,
    /// Log level (trace, debug, info, warn, error, off).
    pub level: String,
    /// Hours to keep log files.
    pub retention_hours: u32,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            retention_hours: 24,
        }
    }
}

/// Plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Trigger-word preferences.
    pub keywords: Keywords,
    /// Terminal emulator for shell/log rows.
    pub default_terminal: String,
    /// Logging settings.
    pub log: LogSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: Keywords::default(),
            default_terminal: "gnome-terminal".to_string(),
            log: LogSettings::default(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML.
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Returns the dockhand data directory (~/.dockhand).
    #[must_use]
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dockhand")
    }

    /// Returns the config file path.
    #[must_use]
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Loads the config file, writing the commented default on first run.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads a config file from an explicit path.
    pub fn load_from(path: &PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let mut file = fs::File::create(path)?;
            file.write_all(DEFAULT_CONFIG.as_bytes())?;
            tracing::info!("wrote default config to {}", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads the config, falling back to defaults on any error.
    #[must_use]
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("failed to load config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Resolves a trigger word to a logical keyword.
    #[must_use]
    pub fn keyword_id(&self, trigger: &str) -> KeywordId {
        self.keywords.resolve(trigger)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_content_parses() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_writes_default_on_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.default_terminal, "gnome-terminal");

        // Second load reads the file it just wrote.
        let again = Config::load_from(&path).unwrap();
        assert_eq!(config, again);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(r#"default_terminal = "kitty""#).unwrap();
        assert_eq!(config.default_terminal, "kitty");
        assert_eq!(config.keywords, Keywords::default());
        assert_eq!(config.log, LogSettings::default());
    }
}
