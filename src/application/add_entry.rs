//! Add entry use case

use crate::domain::{EntryDraft, Session};
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;

/// Append a new entry for the session user.
/// The mood range is enforced by the CLI argument parser; the store itself
/// does not validate it.
pub fn add_entry(
    repository: &FileSystemRepository,
    session: &Session,
    draft: &EntryDraft,
) -> Result<()> {
    let store = repository.open_store()?;
    store.append(session, draft)
}
