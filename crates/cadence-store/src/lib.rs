//! Local persistence for Cadence tasks and completion records.
//!
//! This crate provides SQLite-based storage for the task table and the
//! dated completion log the statistics engine aggregates over.
//!
//! # Features
//!
//! - Task CRUD keyed by weekday
//! - Idempotent completion upserts on the `(date, task_id)` natural key
//! - Full-log reads ordered for deterministic aggregation
//! - Per-date and global resets of the completion log
//! - CSV export/import with duplicate detection
//!
//! # Example
//!
//! ```no_run
//! use cadence_store::Store;
//! use time::{Weekday, macros::date};
//!
//! let store = Store::open_default()?;
//!
//! let id = store.add_task(Weekday::Monday, "Morning run")?;
//! store.upsert_completion(date!(2024-01-01), id, true)?;
//!
//! let log = store.all_completions()?;
//! # Ok::<(), cadence_store::Error>(())
//! ```

mod error;
mod export;
mod schema;
mod store;

pub use error::{Error, Result};
pub use export::ImportResult;
pub use store::Store;

/// Default database path following platform conventions.
///
/// - Linux: `~/.local/share/cadence/data.db`
/// - macOS: `~/Library/Application Support/cadence/data.db`
/// - Windows: `C:\Users\<user>\AppData\Local\cadence\data.db`
pub fn default_db_path() -> std::path::PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| std::path::PathBuf::from("."))
        .join("cadence")
        .join("data.db")
}
