//! Configuration management

use crate::error::{DayjotError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Table file name, relative to the journal root.
    pub table: String,
    /// Default export file name.
    pub export: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            table: "journal.csv".to_string(),
            export: "journal_export.csv".to_string(),
            created: Utc::now(),
        }
    }

    /// Load config from .dayjot/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".dayjot").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DayjotError::NotJournalDirectory(path.to_path_buf())
            } else {
                DayjotError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DayjotError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .dayjot/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let dayjot_dir = path.join(".dayjot");
        let config_path = dayjot_dir.join("config.toml");

        if !dayjot_dir.exists() {
            fs::create_dir(&dayjot_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| DayjotError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}
