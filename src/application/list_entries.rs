//! List entries use case

use crate::domain::{Entry, Session};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, Position};

/// Return the most recent `limit` entries for the session user, oldest
/// first, in physical (append) order. `None` returns the whole history.
pub fn list_entries(
    repository: &FileSystemRepository,
    session: &Session,
    limit: Option<usize>,
) -> Result<Vec<(Position, Entry)>> {
    let store = repository.open_store()?;
    let mut entries = store.list_by_user(session)?;

    if let Some(n) = limit {
        let skip = entries.len().saturating_sub(n);
        entries.drain(..skip);
    }

    Ok(entries)
}
