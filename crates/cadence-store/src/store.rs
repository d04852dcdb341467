//! Main store implementation.

use std::collections::HashMap;
use std::path::Path;

use rusqlite::Connection;
use time::{Date, Weekday};
use tracing::{debug, info};

use cadence_types::{CompletionRecord, Task, format_date, parse_date, parse_weekday, weekday_name};

use crate::error::Result;
use crate::schema;

/// SQLite-based store for tasks and their completion log.
pub struct Store {
    pub(crate) conn: Connection,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| crate::Error::CreateDirectory {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        info!("Opening database at {}", path.display());
        let conn = Connection::open(path)?;

        // WAL mode for better performance. Foreign keys stay off: the
        // completion log must survive deletion of the task it references.
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;",
        )?;

        // Initialize schema
        schema::initialize(&conn)?;

        Ok(Self { conn })
    }

    /// Open the default database location.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::default_db_path())
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }
}

// Task operations
impl Store {
    /// Add a task for a weekday, returning the assigned id.
    ///
    /// Descriptions are stored as given; rejecting empty input is the
    /// caller's concern.
    pub fn add_task(&self, weekday: Weekday, description: &str) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO tasks (weekday, description) VALUES (?1, ?2)",
            rusqlite::params![weekday_name(weekday), description],
        )?;

        let id = self.conn.last_insert_rowid();
        debug!("Added task {} for {}", id, weekday_name(weekday));
        Ok(id)
    }

    /// List the tasks assigned to one weekday, ordered by id.
    pub fn list_tasks(&self, weekday: Weekday) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, weekday, description FROM tasks WHERE weekday = ? ORDER BY id",
        )?;

        let rows = stmt
            .query_map([weekday_name(weekday)], task_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(task_from_row).collect()
    }

    /// List every task, ordered by id.
    pub fn list_all_tasks(&self) -> Result<Vec<Task>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, weekday, description FROM tasks ORDER BY id")?;

        let rows = stmt
            .query_map([], task_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(task_from_row).collect()
    }

    /// Delete a task. Its completion history is kept.
    pub fn delete_task(&self, task_id: i64) -> Result<()> {
        let deleted = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?", [task_id])?;
        debug!("Deleted {} task(s) with id {}", deleted, task_id);
        Ok(())
    }

    /// Count all tasks.
    pub fn count_tasks(&self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

// Completion operations
impl Store {
    /// Insert or replace the completion state for one `(date, task)` pair.
    ///
    /// Re-toggling the same pair overwrites the existing row, so the log
    /// never accumulates duplicates.
    pub fn upsert_completion(&self, date: Date, task_id: i64, completed: bool) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO completions (date, task_id, completed)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![format_date(date), task_id, completed],
        )?;
        Ok(())
    }

    /// Completion states recorded for one date, keyed by task id.
    pub fn completions_for(&self, date: Date) -> Result<HashMap<i64, bool>> {
        let mut stmt = self
            .conn
            .prepare("SELECT task_id, completed FROM completions WHERE date = ?")?;

        let map = stmt
            .query_map([format_date(date)], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, bool>(1)?))
            })?
            .collect::<std::result::Result<HashMap<_, _>, _>>()?;

        Ok(map)
    }

    /// The full completion log, ordered by date then task id.
    ///
    /// Fails on the first row whose stored date does not parse; corrupt
    /// rows are never silently dropped.
    pub fn all_completions(&self) -> Result<Vec<CompletionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT date, task_id, completed FROM completions ORDER BY date, task_id",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, bool>(2)?,
                ))
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter()
            .map(|(date, task_id, completed)| {
                Ok(CompletionRecord::new(parse_date(&date)?, task_id, completed))
            })
            .collect()
    }

    /// Delete all completion records for one date, returning how many
    /// rows were removed.
    ///
    /// Deletion means "not tracked" for that date, which is distinct from
    /// writing `completed = false`.
    pub fn delete_completions(&self, date: Date) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM completions WHERE date = ?", [format_date(date)])?;
        info!("Reset {} completion record(s) for {}", deleted, format_date(date));
        Ok(deleted)
    }

    /// Clear the entire completion log.
    pub fn delete_all_completions(&self) -> Result<usize> {
        let deleted = self.conn.execute("DELETE FROM completions", [])?;
        info!("Cleared {} completion record(s)", deleted);
        Ok(deleted)
    }

    /// Count all completion records.
    pub fn count_completions(&self) -> Result<u64> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM completions", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

fn task_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<(i64, String, String)> {
    Ok((row.get(0)?, row.get(1)?, row.get(2)?))
}

fn task_from_row((id, weekday, description): (i64, String, String)) -> Result<Task> {
    Ok(Task {
        id,
        weekday: parse_weekday(&weekday)?,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_open_in_memory() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(store.count_tasks().unwrap(), 0);
        assert_eq!(store.count_completions().unwrap(), 0);
    }

    #[test]
    fn test_open_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("data.db");

        let store = Store::open(&path).unwrap();
        assert_eq!(store.count_tasks().unwrap(), 0);
        assert!(path.exists());
    }

    #[test]
    fn test_add_and_list_tasks_filters_by_weekday() {
        let store = Store::open_in_memory().unwrap();

        let run = store.add_task(Weekday::Monday, "Morning run").unwrap();
        store.add_task(Weekday::Tuesday, "Laundry").unwrap();
        let read = store.add_task(Weekday::Monday, "Read a chapter").unwrap();

        let monday = store.list_tasks(Weekday::Monday).unwrap();
        assert_eq!(monday.len(), 2);
        assert_eq!(monday[0].id, run);
        assert_eq!(monday[0].description, "Morning run");
        assert_eq!(monday[1].id, read);

        assert_eq!(store.list_tasks(Weekday::Sunday).unwrap().len(), 0);
        assert_eq!(store.list_all_tasks().unwrap().len(), 3);
    }

    #[test]
    fn test_delete_task_keeps_completion_history() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_task(Weekday::Monday, "Morning run").unwrap();
        store.upsert_completion(date!(2024-01-01), id, true).unwrap();

        store.delete_task(id).unwrap();

        assert_eq!(store.count_tasks().unwrap(), 0);
        let log = store.all_completions().unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].task_id, id);
    }

    #[test]
    fn test_upsert_completion_overwrites_not_appends() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_task(Weekday::Monday, "Morning run").unwrap();

        store.upsert_completion(date!(2024-01-01), id, true).unwrap();
        store.upsert_completion(date!(2024-01-01), id, false).unwrap();

        assert_eq!(store.count_completions().unwrap(), 1);
        let progress = store.completions_for(date!(2024-01-01)).unwrap();
        assert_eq!(progress.get(&id), Some(&false));
    }

    #[test]
    fn test_completions_for_only_returns_requested_date() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_task(Weekday::Monday, "Morning run").unwrap();

        store.upsert_completion(date!(2024-01-01), id, true).unwrap();
        store.upsert_completion(date!(2024-01-08), id, false).unwrap();

        let progress = store.completions_for(date!(2024-01-01)).unwrap();
        assert_eq!(progress.len(), 1);
        assert_eq!(progress.get(&id), Some(&true));
    }

    #[test]
    fn test_all_completions_ordered_by_date_then_task() {
        let store = Store::open_in_memory().unwrap();
        let a = store.add_task(Weekday::Monday, "A").unwrap();
        let b = store.add_task(Weekday::Monday, "B").unwrap();

        store.upsert_completion(date!(2024-01-08), a, true).unwrap();
        store.upsert_completion(date!(2024-01-01), b, false).unwrap();
        store.upsert_completion(date!(2024-01-01), a, true).unwrap();

        let log = store.all_completions().unwrap();
        let keys: Vec<(Date, i64)> = log.iter().map(|r| (r.date, r.task_id)).collect();
        assert_eq!(
            keys,
            vec![
                (date!(2024-01-01), a),
                (date!(2024-01-01), b),
                (date!(2024-01-08), a),
            ]
        );
    }

    #[test]
    fn test_all_completions_rejects_malformed_date() {
        let store = Store::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO completions (date, task_id, completed) VALUES ('not-a-date', 1, 1)",
                [],
            )
            .unwrap();

        let err = store.all_completions().unwrap_err();
        assert!(matches!(err, crate::Error::Corrupt(_)));
    }

    #[test]
    fn test_list_tasks_rejects_malformed_weekday() {
        let store = Store::open_in_memory().unwrap();
        store
            .conn
            .execute(
                "INSERT INTO tasks (weekday, description) VALUES ('Caturday', 'Nap')",
                [],
            )
            .unwrap();

        let err = store.list_all_tasks().unwrap_err();
        assert!(matches!(err, crate::Error::Corrupt(_)));
    }

    #[test]
    fn test_delete_completions_for_one_date() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_task(Weekday::Monday, "Morning run").unwrap();

        store.upsert_completion(date!(2024-01-01), id, true).unwrap();
        store.upsert_completion(date!(2024-01-08), id, true).unwrap();

        let deleted = store.delete_completions(date!(2024-01-01)).unwrap();
        assert_eq!(deleted, 1);
        assert_eq!(store.count_completions().unwrap(), 1);
        assert!(store.completions_for(date!(2024-01-01)).unwrap().is_empty());
    }

    #[test]
    fn test_delete_all_completions() {
        let store = Store::open_in_memory().unwrap();
        let id = store.add_task(Weekday::Monday, "Morning run").unwrap();

        store.upsert_completion(date!(2024-01-01), id, true).unwrap();
        store.upsert_completion(date!(2024-01-08), id, false).unwrap();

        let deleted = store.delete_all_completions().unwrap();
        assert_eq!(deleted, 2);
        assert_eq!(store.count_completions().unwrap(), 0);
    }
}
