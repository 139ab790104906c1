//! Journal root discovery

use crate::error::{DayjotError, Result};
use crate::infrastructure::{Config, EntryStore};
use std::fs;
use std::path::{Path, PathBuf};

/// Locates the journal directory and hands out configured stores.
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the journal root.
    /// First checks the DAYJOT_ROOT environment variable, then falls back
    /// to walking up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYJOT_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_dayjot_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(DayjotError::Config(format!(
                    "DAYJOT_ROOT is set to '{}' but no .dayjot directory found. \
                    Run 'dayjot init' in that directory or unset DAYJOT_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_dayjot_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(DayjotError::NotJournalDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_dayjot_dir(path: &Path) -> bool {
        path.join(".dayjot").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_dayjot_dir(&self.root)
    }

    /// Create the .dayjot marker directory
    pub fn initialize(&self) -> Result<()> {
        let dayjot_dir = self.root.join(".dayjot");

        if dayjot_dir.exists() {
            return Err(DayjotError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&dayjot_dir)?;
        Ok(())
    }

    /// Open the entry store backed by the configured table file.
    pub fn open_store(&self) -> Result<EntryStore> {
        let config = self.load_config()?;
        Ok(EntryStore::new(self.root.join(&config.table)))
    }
}
