//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let config = Config::new();
    repo.save_config(&config)?;

    // Create the backing table with its header row.
    let store = repo.open_store()?;
    store.create_table()?;

    println!("Initialized dayjot journal at {}", path.display());
    println!("Table: {}", config.table);

    Ok(())
}
