//! Edit entry use case
//!
//! Positions are coordinates, not identities: the row position is derived
//! from the current table contents immediately before the write, never
//! reused from an earlier listing.

use crate::domain::{Column, Session};
use crate::error::{DayjotError, Result};
use crate::infrastructure::{FileSystemRepository, Position};

/// Field values to overwrite; `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub mood: Option<u8>,
    pub did_today: Option<String>,
    pub meaningful_event: Option<String>,
    pub self_choice: Option<String>,
    pub dont_repeat: Option<String>,
    pub plan_tomorrow: Option<String>,
    pub tags: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }

    /// Named columns and their new values, in schema order.
    pub fn fields(&self) -> Vec<(Column, String)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.did_today {
            fields.push((Column::DidToday, v.clone()));
        }
        if let Some(v) = &self.meaningful_event {
            fields.push((Column::MeaningfulEvent, v.clone()));
        }
        if let Some(m) = self.mood {
            fields.push((Column::Mood, m.to_string()));
        }
        if let Some(v) = &self.self_choice {
            fields.push((Column::SelfChoice, v.clone()));
        }
        if let Some(v) = &self.dont_repeat {
            fields.push((Column::DontRepeat, v.clone()));
        }
        if let Some(v) = &self.plan_tomorrow {
            fields.push((Column::PlanTomorrow, v.clone()));
        }
        if let Some(v) = &self.tags {
            fields.push((Column::Tags, v.clone()));
        }
        fields
    }
}

/// Patch the session user's entry for `date`, returning the updated row's
/// position. Duplicate dates resolve to the most recent append. Returns
/// `NotFound` when the user has no entry on that date; callers should treat
/// that as "nothing to edit", not an alarm.
pub fn edit_entry(
    repository: &FileSystemRepository,
    session: &Session,
    date: &str,
    patch: &EntryPatch,
) -> Result<Position> {
    let store = repository.open_store()?;

    let (position, _current) = store
        .find_by_user_and_date(session, date)?
        .ok_or_else(|| DayjotError::NotFound {
            user: session.user.clone(),
            date: date.to_string(),
        })?;

    store.update_at_position(position, &patch.fields())?;
    Ok(position)
}
