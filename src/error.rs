//! Error types for dayjot

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the dayjot application
#[derive(Debug, Error)]
pub enum DayjotError {
    #[error("Not a dayjot journal: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Journal table is unreachable: {0}")]
    BackingStoreUnavailable(String),

    #[error("No data row at position {position} (table has {rows} rows)")]
    OutOfRange { position: usize, rows: usize },

    #[error("No entry for user '{user}' on {date}")]
    NotFound { user: String, date: String },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DayjotError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DayjotError::NotJournalDirectory(_) => 2,
            DayjotError::InvalidDate(_) => 3,
            DayjotError::OutOfRange { .. } => 4,
            DayjotError::BackingStoreUnavailable(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DayjotError::NotJournalDirectory(path) => {
                format!(
                    "Not a dayjot journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'dayjot init' in this directory to create a new journal\n\
                    • Navigate to an existing dayjot directory\n\
                    • Set DAYJOT_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            DayjotError::InvalidDate(date) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Dates use the YYYY-MM-DD format.\n\
                    Examples:\n\
                    dayjot add -u alice --mood 7 --date 2025-01-15\n\
                    dayjot edit -u alice --date 2025-01-15 --mood 4",
                    date
                )
            }
            DayjotError::OutOfRange { position, rows } => {
                format!(
                    "No data row at position {} (table has {} rows)\n\n\
                    The row may have been removed outside dayjot.\n\
                    Re-run the command so the position is derived from the\n\
                    current table contents.",
                    position, rows
                )
            }
            DayjotError::BackingStoreUnavailable(msg) => {
                format!(
                    "Journal table is unreachable: {}\n\n\
                    Suggestions:\n\
                    • Check that the table file still exists under the journal root\n\
                    • Run 'dayjot init' if the journal was never initialized\n\
                    • Check file permissions on the journal directory",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DayjotError
pub type Result<T> = std::result::Result<T, DayjotError>;
