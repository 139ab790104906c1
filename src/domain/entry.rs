//! Journal entry model

use crate::error::{DayjotError, Result};
use chrono::{Local, NaiveDate};

/// One journal record for one user on one date.
///
/// `date` is kept as the persisted `YYYY-MM-DD` text; legacy rows may hold
/// values that do not parse as dates and are still listed verbatim.
/// `mood` is `None` when the stored cell is empty or non-numeric; such
/// entries are excluded from trend computation but never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub user: String,
    pub date: String,
    pub did_today: String,
    pub meaningful_event: String,
    pub mood: Option<u8>,
    pub self_choice: String,
    pub dont_repeat: String,
    pub plan_tomorrow: String,
    pub tags: String,
}

/// Field values for a new entry, before the session user is attached.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: String,
    pub mood: u8,
    pub did_today: String,
    pub meaningful_event: String,
    pub self_choice: String,
    pub dont_repeat: String,
    pub plan_tomorrow: String,
    pub tags: String,
}

impl Entry {
    pub fn from_draft(user: &str, draft: &EntryDraft) -> Self {
        Entry {
            user: user.to_string(),
            date: draft.date.clone(),
            did_today: draft.did_today.clone(),
            meaningful_event: draft.meaningful_event.clone(),
            mood: Some(draft.mood),
            self_choice: draft.self_choice.clone(),
            dont_repeat: draft.dont_repeat.clone(),
            plan_tomorrow: draft.plan_tomorrow.clone(),
            tags: draft.tags.clone(),
        }
    }
}

/// Validate a `YYYY-MM-DD` date argument, returning it unchanged.
pub fn validate_date(input: &str) -> Result<String> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|_| input.to_string())
        .map_err(|_| DayjotError::InvalidDate(input.to_string()))
}

/// Today's date in the persisted `YYYY-MM-DD` encoding.
pub fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
