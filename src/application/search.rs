//! Search entries use case

use crate::domain::Entry;
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, Position};

/// Case-insensitive substring search across every column of every entry,
/// all users, in physical row order.
pub fn search(
    repository: &FileSystemRepository,
    query: &str,
) -> Result<Vec<(Position, Entry)>> {
    let store = repository.open_store()?;
    store.search_all(query)
}
