//! Backing table schema descriptor
//!
//! The table keeps the column headers of the spreadsheet it mirrors.
//! Encode and decode both go through this one descriptor, so the column
//! order cannot drift between the append and update paths.

use crate::domain::Entry;

/// Semantic name for one column of the backing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    User,
    Date,
    DidToday,
    MeaningfulEvent,
    Mood,
    SelfChoice,
    DontRepeat,
    PlanTomorrow,
    Tags,
}

impl Column {
    /// Header label as persisted in the table's first row.
    pub fn header_label(self) -> &'static str {
        match self {
            Column::User => "使用者",
            Column::Date => "日期",
            Column::DidToday => "今天你做了什麼",
            Column::MeaningfulEvent => "今天有感覺的事",
            Column::Mood => "今天整體感受",
            Column::SelfChoice => "今天做的事，是自己選的嗎？",
            Column::DontRepeat => "今天最不想再來一次的事",
            Column::PlanTomorrow => "明天你想做什麼",
            Column::Tags => "標籤",
        }
    }

    /// English label used for CSV export headers.
    pub fn export_label(self) -> &'static str {
        match self {
            Column::User => "User",
            Column::Date => "Date",
            Column::DidToday => "What did you do today?",
            Column::MeaningfulEvent => "Meaningful Event",
            Column::Mood => "Mood",
            Column::SelfChoice => "Was it your choice?",
            Column::DontRepeat => "What you wouldn't repeat",
            Column::PlanTomorrow => "Plans for tomorrow",
            Column::Tags => "Tags",
        }
    }
}

/// Fixed column order shared by every row.
const COLUMNS: [Column; 9] = [
    Column::User,
    Column::Date,
    Column::DidToday,
    Column::MeaningfulEvent,
    Column::Mood,
    Column::SelfChoice,
    Column::DontRepeat,
    Column::PlanTomorrow,
    Column::Tags,
];

/// Ordered column descriptor, resolved once at store initialization.
#[derive(Debug, Clone, Default)]
pub struct Schema;

impl Schema {
    pub fn new() -> Self {
        Schema
    }

    pub fn columns(&self) -> &'static [Column] {
        &COLUMNS
    }

    pub fn len(&self) -> usize {
        COLUMNS.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Index of a column within a row. Every `Column` is in the schema.
    pub fn index_of(&self, column: Column) -> usize {
        COLUMNS
            .iter()
            .position(|&c| c == column)
            .expect("every column is part of the fixed schema")
    }

    /// The persisted header row.
    pub fn header(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|c| c.header_label().to_string())
            .collect()
    }

    /// The renamed header row used for CSV export.
    pub fn export_header(&self) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|c| c.export_label().to_string())
            .collect()
    }

    /// Encode an entry into the fixed column order.
    pub fn encode(&self, entry: &Entry) -> Vec<String> {
        COLUMNS
            .iter()
            .map(|c| match c {
                Column::User => entry.user.clone(),
                Column::Date => entry.date.clone(),
                Column::DidToday => entry.did_today.clone(),
                Column::MeaningfulEvent => entry.meaningful_event.clone(),
                Column::Mood => entry.mood.map(|m| m.to_string()).unwrap_or_default(),
                Column::SelfChoice => entry.self_choice.clone(),
                Column::DontRepeat => entry.dont_repeat.clone(),
                Column::PlanTomorrow => entry.plan_tomorrow.clone(),
                Column::Tags => entry.tags.clone(),
            })
            .collect()
    }

    /// Decode a row into an entry.
    ///
    /// Rows shorter than the schema (legacy rows without the trailing tags
    /// column) decode with the missing cells as empty strings. A mood cell
    /// that does not parse as an integer becomes `None`.
    pub fn decode(&self, row: &[String]) -> Entry {
        let cell = |column: Column| row.get(self.index_of(column)).cloned().unwrap_or_default();

        Entry {
            user: cell(Column::User),
            date: cell(Column::Date),
            did_today: cell(Column::DidToday),
            meaningful_event: cell(Column::MeaningfulEvent),
            mood: cell(Column::Mood).trim().parse::<u8>().ok(),
            self_choice: cell(Column::SelfChoice),
            dont_repeat: cell(Column::DontRepeat),
            plan_tomorrow: cell(Column::PlanTomorrow),
            tags: cell(Column::Tags),
        }
    }
}
