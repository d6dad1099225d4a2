//! Persistent command history.

use anyhow::Result;
use rustyline::config::Configurer;
use rustyline::history::FileHistory;
use rustyline::{Editor, Helper};
use std::path::PathBuf;

/// Configuration for command history.
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Path to the history file.
    pub path: PathBuf,
    /// Maximum number of entries to keep.
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("history"),
            max_entries: 1000,
        }
    }
}

impl HistoryConfig {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            ..Default::default()
        }
    }

    pub fn with_max_entries(mut self, max: usize) -> Self {
        self.max_entries = max;
        self
    }

    /// Applies the size limit and loads any existing history into `editor`.
    pub fn load_into<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        editor.set_max_history_size(self.max_entries)?;

        if self.path.exists() {
            if let Err(e) = editor.load_history(&self.path) {
                log::warn!("Could not load history: {}", e);
            } else {
                log::debug!("Loaded history from {}", self.path.display());
            }
        }

        Ok(())
    }

    /// Writes the editor's history to disk, creating the directory if needed.
    pub fn save_from<H: Helper>(&self, editor: &mut Editor<H, FileHistory>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        editor.save_history(&self.path)?;
        log::debug!("Saved history to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_config_default() {
        let config = HistoryConfig::default();
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.path, PathBuf::from("history"));
    }

    #[test]
    fn test_history_config_builder() {
        let config = HistoryConfig::new(PathBuf::from("/tmp/history")).with_max_entries(500);

        assert_eq!(config.path, PathBuf::from("/tmp/history"));
        assert_eq!(config.max_entries, 500);
    }
}
