//! Output formatting utilities

use crate::application::TrendPoint;
use crate::domain::Entry;
use crate::infrastructure::Position;
use std::collections::BTreeSet;

/// Format entries as labeled blocks for display.
pub fn format_entry_list(entries: &[(Position, Entry)]) -> String {
    if entries.is_empty() {
        return "No entries found\n".to_string();
    }

    let mut output = String::new();
    for (position, entry) in entries {
        let mood = entry
            .mood
            .map(|m| format!("{}/10", m))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{}  {}  mood {}  (row {})\n",
            entry.date, entry.user, mood, position
        ));
        push_field(&mut output, "Did today", &entry.did_today);
        push_field(&mut output, "Meaningful", &entry.meaningful_event);
        push_field(&mut output, "Your choice?", &entry.self_choice);
        push_field(&mut output, "Wouldn't repeat", &entry.dont_repeat);
        push_field(&mut output, "Tomorrow", &entry.plan_tomorrow);
        push_field(&mut output, "Tags", &entry.tags);
        output.push('\n');
    }
    output
}

fn push_field(output: &mut String, label: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    // Keep multi-line values aligned under their label.
    let value = value.replace('\n', "\n      ");
    output.push_str(&format!("  {:<16} {}\n", format!("{}:", label), value));
}

/// Format the set of known users for display.
pub fn format_user_list(users: &BTreeSet<String>) -> String {
    if users.is_empty() {
        return "No users found\n".to_string();
    }

    let mut output = String::new();
    for user in users {
        output.push_str(user);
        output.push('\n');
    }
    output
}

/// Format mood trend points as one bar per line, dates ascending.
pub fn format_trend(points: &[TrendPoint]) -> String {
    if points.is_empty() {
        return "No mood data found\n".to_string();
    }

    let mut output = String::new();
    for point in points {
        output.push_str(&format!(
            "{}  {:>2}/10  {}\n",
            point.date.format("%Y-%m-%d"),
            point.mood,
            "#".repeat(point.mood as usize)
        ));
    }
    output
}
