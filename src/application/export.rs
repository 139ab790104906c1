//! CSV export use case
//!
//! Output is UTF-8 with a byte-order mark and the header renamed to the
//! English label set, one row per entry.

use crate::domain::{Entry, Session};
use crate::error::Result;
use crate::infrastructure::{csv, FileSystemRepository};
use std::fs;
use std::path::{Path, PathBuf};

const BOM: &str = "\u{feff}";

/// Which entries to export.
#[derive(Debug, Clone)]
pub enum ExportSelection {
    /// All of one user's entries on one date.
    Day { user: String, date: String },
    /// A user's most recent entries, in append order.
    Recent { user: String, limit: usize },
    /// Every entry, all users.
    All,
}

#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub rows: usize,
}

/// Write the selected entries as CSV. The default file name comes from the
/// journal config (`journal_export.csv`), resolved against the current
/// directory. A failed write is a hard error; nothing is partially usable.
pub fn export(
    repository: &FileSystemRepository,
    selection: &ExportSelection,
    output: Option<&Path>,
) -> Result<ExportSummary> {
    let config = repository.load_config()?;
    let store = repository.open_store()?;

    let entries: Vec<Entry> = match selection {
        ExportSelection::Day { user, date } => {
            let session = Session::new(user)?;
            store
                .list_by_user(&session)?
                .into_iter()
                .map(|(_, entry)| entry)
                .filter(|entry| &entry.date == date)
                .collect()
        }
        ExportSelection::Recent { user, limit } => {
            let session = Session::new(user)?;
            let mut entries: Vec<Entry> = store
                .list_by_user(&session)?
                .into_iter()
                .map(|(_, entry)| entry)
                .collect();
            let skip = entries.len().saturating_sub(*limit);
            entries.drain(..skip);
            entries
        }
        ExportSelection::All => store.all_entries()?,
    };

    let schema = store.schema();
    let mut content = String::from(BOM);
    csv::push_record(&mut content, &schema.export_header());
    for entry in &entries {
        csv::push_record(&mut content, &schema.encode(entry));
    }

    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.export));
    fs::write(&path, content)?;

    Ok(ExportSummary {
        path,
        rows: entries.len(),
    })
}
