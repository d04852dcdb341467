//! Progress aggregation and statistics engine for the Cadence task tracker.
//!
//! This crate turns the sparse completion log into derived views: overall
//! totals, per-date and per-ISO-week completion rates, day-of-week
//! performance, a calendar heatmap table, and a ranking of frequently
//! incomplete tasks.
//!
//! The engine is pure: it takes the full record set and task list as plain
//! inputs, holds no state, performs no I/O, and recomputes every view from
//! scratch on each call. Expected data volumes (one user, a handful of
//! tasks per day) keep the O(N) recompute well under any latency concern.
//!
//! # Example
//!
//! ```
//! use cadence_core::compute_statistics;
//! use cadence_types::{CompletionRecord, Task};
//! use time::{Weekday, macros::date};
//!
//! let tasks = vec![Task {
//!     id: 1,
//!     weekday: Weekday::Monday,
//!     description: "Morning run".to_string(),
//! }];
//! let records = vec![CompletionRecord::new(date!(2024-01-01), 1, true)];
//!
//! let stats = compute_statistics(&records, &tasks).expect("log is non-empty");
//! assert_eq!(stats.overall.rate, 100.0);
//!
//! // An empty log is "no data yet", not a zero-filled result.
//! assert!(compute_statistics(&[], &tasks).is_none());
//! ```

pub mod progress;
pub mod stats;

pub use progress::{DailyProgress, daily_progress};
pub use stats::{
    DailyStats, DaywiseStats, HeatmapRow, IncompleteTask, OverallStats, Statistics,
    TOP_INCOMPLETE_LIMIT, WeeklyStats, compute_statistics, motivational_message,
};
