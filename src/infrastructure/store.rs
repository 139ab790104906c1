//! Entry store over the CSV table file
//!
//! The table is a header row followed by data rows in append order. Rows
//! are addressed by position (1-based, header excluded); there is no other
//! key. Appends go to the end of the file; positional updates rewrite the
//! whole table through a temp file. There is no locking and no version
//! check across a read-then-write cycle, so callers must re-derive a row's
//! position immediately before updating it. Concurrent writers are
//! last-write-wins, undetected.

use crate::domain::{Column, Entry, EntryDraft, Schema, Session};
use crate::error::{DayjotError, Result};
use crate::infrastructure::csv;
use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// 1-based index of a data row, excluding the header row.
pub type Position = usize;

/// User-partitioned record storage with positional update.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
    schema: Schema,
}

impl EntryStore {
    pub fn new(path: PathBuf) -> Self {
        EntryStore {
            path,
            schema: Schema::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Write the table file with its header row. An existing file is left
    /// untouched; it already is the backing table.
    pub fn create_table(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        fs::write(&self.path, csv::format_record(&self.schema.header()))
            .map_err(|e| self.unreachable(e))?;
        Ok(())
    }

    /// Distinct non-empty user values across all rows.
    /// Fails soft: an unreachable or empty table yields an empty set, since
    /// the result only feeds a selection convenience list.
    pub fn list_users(&self) -> BTreeSet<String> {
        let Ok(rows) = self.data_rows() else {
            return BTreeSet::new();
        };
        let user_idx = self.schema.index_of(Column::User);
        rows.into_iter()
            .filter_map(|(_, row)| row.into_iter().nth(user_idx))
            .filter(|user| !user.is_empty())
            .collect()
    }

    /// Append a new entry as the last row of the table.
    pub fn append(&self, session: &Session, draft: &EntryDraft) -> Result<()> {
        self.append_entry(&Entry::from_draft(&session.user, draft))
    }

    /// Append an already-built entry. Write failures are hard errors.
    pub fn append_entry(&self, entry: &Entry) -> Result<()> {
        let record = csv::format_record(&self.schema.encode(entry));
        let mut file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|e| self.unreachable(e))?;
        file.write_all(record.as_bytes())
            .map_err(|e| self.unreachable(e))?;
        Ok(())
    }

    /// All rows whose user matches exactly (case-sensitive), in physical
    /// row order, each with its current position.
    pub fn list_by_user(&self, session: &Session) -> Result<Vec<(Position, Entry)>> {
        let user_idx = self.schema.index_of(Column::User);
        Ok(self
            .data_rows()?
            .into_iter()
            .filter(|(_, row)| row.get(user_idx).is_some_and(|u| u == &session.user))
            .map(|(position, row)| (position, self.schema.decode(&row)))
            .collect())
    }

    /// Find the entry for a user on a date.
    /// When duplicate dates exist the LAST matching row wins, i.e. the most
    /// recent append.
    pub fn find_by_user_and_date(
        &self,
        session: &Session,
        date: &str,
    ) -> Result<Option<(Position, Entry)>> {
        Ok(self
            .list_by_user(session)?
            .into_iter()
            .rev()
            .find(|(_, entry)| entry.date == date))
    }

    /// Overwrite only the named columns of the row at `position`.
    /// Fails with `OutOfRange` when the position has no data row; the table
    /// is left unmodified in that case. Row count and schema never change.
    pub fn update_at_position(
        &self,
        position: Position,
        fields: &[(Column, String)],
    ) -> Result<()> {
        let mut records = self.read_records()?;
        let rows = records.len().saturating_sub(1);
        if position == 0 || position > rows {
            return Err(DayjotError::OutOfRange { position, rows });
        }

        let row = &mut records[position]; // header sits at index 0
        if row.len() < self.schema.len() {
            row.resize(self.schema.len(), String::new());
        }
        for (column, value) in fields {
            row[self.schema.index_of(*column)] = value.clone();
        }

        self.write_records(&records)
    }

    /// Case-insensitive substring match against the string form of every
    /// cell of every row, across all users, in physical row order.
    pub fn search_all(&self, query: &str) -> Result<Vec<(Position, Entry)>> {
        let needle = query.to_lowercase();
        Ok(self
            .data_rows()?
            .into_iter()
            .filter(|(_, row)| !row.iter().all(|cell| cell.is_empty()))
            .filter(|(_, row)| {
                row.iter()
                    .any(|cell| cell.to_lowercase().contains(&needle))
            })
            .map(|(position, row)| (position, self.schema.decode(&row)))
            .collect())
    }

    /// Every data row across all users, in physical order.
    pub fn all_entries(&self) -> Result<Vec<Entry>> {
        Ok(self
            .data_rows()?
            .into_iter()
            .filter(|(_, row)| !row.iter().all(|cell| cell.is_empty()))
            .map(|(_, row)| self.schema.decode(&row))
            .collect())
    }

    fn read_records(&self) -> Result<Vec<Vec<String>>> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.unreachable(e))?;
        Ok(csv::parse(&content))
    }

    fn data_rows(&self) -> Result<Vec<(Position, Vec<String>)>> {
        let mut records = self.read_records()?;
        if records.is_empty() {
            return Ok(Vec::new());
        }
        records.remove(0); // header
        Ok(records
            .into_iter()
            .enumerate()
            .map(|(i, row)| (i + 1, row))
            .collect())
    }

    /// Rewrite the whole table using a best-effort atomic replace: write to
    /// a temp file next to the table, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_records(&self, records: &[Vec<String>]) -> Result<()> {
        let mut content = String::new();
        for record in records {
            csv::push_record(&mut content, record);
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("journal.csv"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, &content).map_err(|e| self.unreachable(e))?;

        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| self.unreachable(e))?;
        }

        fs::rename(&tmp_path, &self.path)
            .map_err(|e| self.unreachable(e))?;
        Ok(())
    }

    fn unreachable(&self, err: std::io::Error) -> DayjotError {
        DayjotError::BackingStoreUnavailable(format!("{}: {}", self.path.display(), err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(temp: &TempDir) -> EntryStore {
        let store = EntryStore::new(temp.path().join("journal.csv"));
        store.create_table().unwrap();
        store
    }

    fn session(user: &str) -> Session {
        Session::new(user).unwrap()
    }

    fn draft(date: &str, mood: u8, did_today: &str) -> EntryDraft {
        EntryDraft {
            date: date.to_string(),
            mood,
            did_today: did_today.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_append_then_list_round_trips_last() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        store.append(&alice, &draft("2024-01-01", 8, "hiked")).unwrap();

        let full = EntryDraft {
            date: "2024-01-02".to_string(),
            mood: 3,
            did_today: "debugged, then \"shipped\"".to_string(),
            meaningful_event: "first line\nsecond line".to_string(),
            self_choice: "mostly".to_string(),
            dont_repeat: "the 7am call".to_string(),
            plan_tomorrow: "rest".to_string(),
            tags: "work,tired".to_string(),
        };
        store.append(&alice, &full).unwrap();

        let entries = store.list_by_user(&alice).unwrap();
        assert_eq!(entries.len(), 2);
        let (position, last) = entries.last().unwrap();
        assert_eq!(*position, 2);
        assert_eq!(last, &Entry::from_draft("alice", &full));
    }

    #[test]
    fn test_list_by_user_is_partitioned_and_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        store
            .append(&session("alice"), &draft("2024-01-01", 8, "a"))
            .unwrap();
        store
            .append(&session("bob"), &draft("2024-01-01", 4, "b"))
            .unwrap();

        assert_eq!(store.list_by_user(&session("alice")).unwrap().len(), 1);
        assert_eq!(store.list_by_user(&session("Alice")).unwrap().len(), 0);
        assert!(store.list_by_user(&session("nobody")).unwrap().is_empty());
    }

    #[test]
    fn test_find_by_user_and_date() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        store.append(&alice, &draft("2024-01-01", 8, "a")).unwrap();
        store.append(&alice, &draft("2024-01-02", 3, "b")).unwrap();

        let (position, entry) = store
            .find_by_user_and_date(&alice, "2024-01-02")
            .unwrap()
            .unwrap();
        assert_eq!(position, 2);
        assert_eq!(entry.mood, Some(3));

        assert!(store
            .find_by_user_and_date(&alice, "2024-03-01")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_find_duplicate_dates_latest_append_wins() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        store.append(&alice, &draft("2024-01-01", 2, "morning")).unwrap();
        store.append(&alice, &draft("2024-01-01", 9, "evening")).unwrap();

        let (position, entry) = store
            .find_by_user_and_date(&alice, "2024-01-01")
            .unwrap()
            .unwrap();
        assert_eq!(position, 2);
        assert_eq!(entry.did_today, "evening");
    }

    #[test]
    fn test_update_at_position_changes_only_named_columns() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        let original = EntryDraft {
            date: "2024-01-01".to_string(),
            mood: 4,
            did_today: "wrote".to_string(),
            meaningful_event: "sunset".to_string(),
            self_choice: "yes".to_string(),
            dont_repeat: "nothing".to_string(),
            plan_tomorrow: "more writing".to_string(),
            tags: "calm".to_string(),
        };
        store.append(&alice, &original).unwrap();

        store
            .update_at_position(1, &[(Column::Mood, "7".to_string())])
            .unwrap();

        let entries = store.list_by_user(&alice).unwrap();
        let (_, updated) = &entries[0];
        assert_eq!(updated.mood, Some(7));

        let mut expected = Entry::from_draft("alice", &original);
        expected.mood = Some(7);
        assert_eq!(updated, &expected);
    }

    #[test]
    fn test_update_out_of_range_leaves_table_unmodified() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");
        store.append(&alice, &draft("2024-01-01", 5, "x")).unwrap();

        let before = fs::read_to_string(store.path()).unwrap();

        let result = store.update_at_position(2, &[(Column::Mood, "7".to_string())]);
        assert!(matches!(
            result,
            Err(DayjotError::OutOfRange { position: 2, rows: 1 })
        ));
        assert!(matches!(
            store.update_at_position(0, &[(Column::Mood, "7".to_string())]),
            Err(DayjotError::OutOfRange { .. })
        ));

        assert_eq!(fs::read_to_string(store.path()).unwrap(), before);
    }

    #[test]
    fn test_update_preserves_row_count_and_order() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        store.append(&alice, &draft("2024-01-01", 1, "one")).unwrap();
        store.append(&alice, &draft("2024-01-02", 2, "two")).unwrap();
        store.append(&alice, &draft("2024-01-03", 3, "three")).unwrap();

        store
            .update_at_position(2, &[(Column::DidToday, "rewritten".to_string())])
            .unwrap();

        let entries = store.list_by_user(&alice).unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].1.did_today, "one");
        assert_eq!(entries[1].1.did_today, "rewritten");
        assert_eq!(entries[1].1.mood, Some(2));
        assert_eq!(entries[2].1.did_today, "three");
    }

    #[test]
    fn test_update_pads_legacy_short_row() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        // A row from a variant without the trailing tags column.
        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all("alice,2024-01-01,a,b,5,c,d,e\n".as_bytes())
            .unwrap();
        drop(file);

        store
            .update_at_position(1, &[(Column::Tags, "legacy".to_string())])
            .unwrap();

        let entries = store.list_by_user(&session("alice")).unwrap();
        assert_eq!(entries[0].1.tags, "legacy");
        assert_eq!(entries[0].1.mood, Some(5));
    }

    #[test]
    fn test_search_all_is_case_insensitive_and_cross_user() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        store
            .append(
                &session("alice"),
                &EntryDraft {
                    date: "2024-01-01".to_string(),
                    mood: 8,
                    meaningful_event: "覺得很滿足".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();
        store
            .append(
                &session("bob"),
                &EntryDraft {
                    date: "2024-01-02".to_string(),
                    mood: 6,
                    did_today: "Read a BOOK about rust".to_string(),
                    ..Default::default()
                },
            )
            .unwrap();

        let matches = store.search_all("滿足").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1.user, "alice");

        let matches = store.search_all("book").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].1.user, "bob");

        // Stable across repeated calls given no intervening writes.
        assert_eq!(store.search_all("book").unwrap(), matches);

        assert!(store.search_all("nothing-like-this").unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_any_column_including_date() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        store
            .append(&session("alice"), &draft("2024-01-02", 6, "x"))
            .unwrap();

        let matches = store.search_all("2024-01").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_list_users_distinct_and_soft() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        // Empty table: empty set without raising.
        assert!(store.list_users().is_empty());

        store
            .append(&session("alice"), &draft("2024-01-01", 5, "a"))
            .unwrap();
        store
            .append(&session("alice"), &draft("2024-01-02", 5, "b"))
            .unwrap();
        store
            .append(&session("bob"), &draft("2024-01-01", 5, "c"))
            .unwrap();

        let users: Vec<String> = store.list_users().into_iter().collect();
        assert_eq!(users, vec!["alice".to_string(), "bob".to_string()]);

        // Unreachable table: empty set, not an error.
        let missing = EntryStore::new(temp.path().join("no-such.csv"));
        assert!(missing.list_users().is_empty());
    }

    #[test]
    fn test_read_paths_report_unreachable_table() {
        let temp = TempDir::new().unwrap();
        let store = EntryStore::new(temp.path().join("no-such.csv"));

        assert!(matches!(
            store.list_by_user(&session("alice")),
            Err(DayjotError::BackingStoreUnavailable(_))
        ));
        assert!(matches!(
            store.search_all("x"),
            Err(DayjotError::BackingStoreUnavailable(_))
        ));
    }

    #[test]
    fn test_append_to_missing_table_is_a_hard_failure() {
        let temp = TempDir::new().unwrap();
        let store = EntryStore::new(temp.path().join("no-such.csv"));

        let result = store.append(&session("alice"), &draft("2024-01-01", 5, "a"));
        assert!(matches!(
            result,
            Err(DayjotError::BackingStoreUnavailable(_))
        ));
    }

    #[test]
    fn test_create_table_writes_header_once() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);

        let content = fs::read_to_string(store.path()).unwrap();
        assert!(content.starts_with("使用者,日期"));
        assert_eq!(content.lines().count(), 1);

        // Second call leaves an existing table untouched.
        store
            .append(&session("alice"), &draft("2024-01-01", 5, "a"))
            .unwrap();
        store.create_table().unwrap();
        assert_eq!(store.list_by_user(&session("alice")).unwrap().len(), 1);
    }

    #[test]
    fn test_multiline_fields_survive_storage() {
        let temp = TempDir::new().unwrap();
        let store = test_store(&temp);
        let alice = session("alice");

        let multiline = EntryDraft {
            date: "2024-01-01".to_string(),
            mood: 5,
            did_today: "morning: run\nevening: read, write".to_string(),
            ..Default::default()
        };
        store.append(&alice, &multiline).unwrap();
        store.append(&alice, &draft("2024-01-02", 6, "next")).unwrap();

        let entries = store.list_by_user(&alice).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(
            entries[0].1.did_today,
            "morning: run\nevening: read, write"
        );
        assert_eq!(entries[0].0, 1);
        assert_eq!(entries[1].0, 2);
    }
}
