//! Mood trend use case

use crate::domain::Session;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use chrono::NaiveDate;

/// One point of the mood trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub mood: u8,
}

/// Compute the mood trend over the user's most recent `limit` entries.
///
/// Entries whose mood cell is missing or non-numeric, and entries whose
/// date does not parse, are excluded rather than treated as errors. Points
/// come back sorted by date ascending.
pub fn mood_trend(
    repository: &FileSystemRepository,
    session: &Session,
    limit: Option<usize>,
) -> Result<Vec<TrendPoint>> {
    let entries = crate::application::list_entries(repository, session, limit)?;

    let mut points: Vec<TrendPoint> = entries
        .iter()
        .filter_map(|(_, entry)| {
            let date = NaiveDate::parse_from_str(&entry.date, "%Y-%m-%d").ok()?;
            let mood = entry.mood?;
            Some(TrendPoint { date, mood })
        })
        .collect();

    points.sort_by_key(|point| point.date);
    Ok(points)
}
