//! Logging setup for the autocomplete binary.
//!
//! Records go to a size-rotated log file with timestamps; warnings and errors
//! are echoed to the terminal when one is attached.

use anyhow::{Result, anyhow};
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::config::AppConfig;

/// Configuration for the logging system.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Path to the log file.
    pub path: PathBuf,
    /// Minimum level written to the file.
    pub level: LevelFilter,
    /// Maximum log file size in bytes before rotation (0 = no limit).
    pub max_size: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("autocomplete.log"),
            level: LevelFilter::Info,
            max_size: 10 * 1024 * 1024,
        }
    }
}

impl LogConfig {
    /// Creates a new LogConfig writing to `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    /// Builds the logging section of an [`AppConfig`].
    pub fn from_app(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.log_path())
            .with_level(config.level()?)
            .with_max_size(config.log_max_size))
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

/// Installs the global logger described by `config`.
///
/// Can only succeed once per process.
pub fn init_logging(config: &LogConfig) -> Result<()> {
    if let Some(parent) = config.path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if needs_rotation(&config.path, config.max_size) {
        rotate_log(&config.path)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.path)
        .map_err(|e| anyhow!("Failed to open log file: {}", e))?;

    let file_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Debug)
        .build();

    let term_config = ConfigBuilder::new()
        .set_time_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> =
        vec![WriteLogger::new(config.level, file_config, log_file)];

    if std::env::var("TERM").is_ok() {
        loggers.push(TermLogger::new(
            LevelFilter::Warn,
            term_config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow!("Failed to initialize logger: {}", e))?;

    log::info!("Logging initialized at level {:?}", config.level);
    log::debug!("Log file: {}", config.path.display());

    Ok(())
}

fn needs_rotation(path: &Path, max_size: u64) -> bool {
    max_size > 0
        && std::fs::metadata(path)
            .map(|meta| meta.len() > max_size)
            .unwrap_or(false)
}

/// Moves the current log aside, suffixed with a timestamp.
fn rotate_log(path: &Path) -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("autocomplete.log");

    let rotated_path = path.with_file_name(format!("{}.{}", file_name, timestamp));
    std::fs::rename(path, &rotated_path)?;

    log::info!("Rotated log file to: {}", rotated_path.display());
    Ok(rotated_path)
}

/// Runs `f` and logs how long it took at debug level.
pub fn timed<T, F: FnOnce() -> T>(operation: &str, f: F) -> T {
    let start = std::time::Instant::now();
    let result = f();
    log::debug!("{} completed in {:?}", operation, start.elapsed());
    result
}
