//! Application configuration loaded from a JSON file.

use anyhow::{Context, Result, anyhow};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

const APP_DIR: &str = ".autocomplete";

/// Settings for the binary and the interactive shell.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding the log file and shell history.
    pub data_dir: PathBuf,
    /// Log level name for the log file.
    pub log_level: String,
    /// Log file size in bytes before rotation (0 = no limit).
    pub log_max_size: u64,
    /// Maximum number of history entries kept by the shell.
    pub history_max_entries: usize,
    /// How many suggestions the shell prints per query.
    pub suggestion_limit: usize,
    /// Whether the shell prints a welcome banner.
    pub show_welcome: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs_next::home_dir()
            .map(|home| home.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from(APP_DIR));

        Self {
            data_dir,
            log_level: "info".to_string(),
            log_max_size: 10 * 1024 * 1024, // 10 MB
            history_max_entries: 1000,
            suggestion_limit: 10,
            show_welcome: true,
        }
    }
}

impl AppConfig {
    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf> {
        dirs_next::home_dir()
            .map(|home| home.join(APP_DIR).join("config.json"))
            .ok_or_else(|| anyhow!("Could not determine home directory"))
    }

    /// Loads the config at `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        config.level()?;
        Ok(config)
    }

    /// Parsed log level.
    pub fn level(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow!("Unknown log level '{}'", self.log_level))
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("autocomplete.log")
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join("history")
    }
}
