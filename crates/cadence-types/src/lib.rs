//! Shared domain types for the Cadence daily task tracker.
//!
//! This crate provides the types passed between the storage layer
//! (cadence-store) and the statistics engine (cadence-core), plus the
//! textual representations both use for weekdays and calendar dates.
//!
//! # Example
//!
//! ```
//! use cadence_types::{CompletionRecord, Task, parse_weekday};
//! use time::macros::date;
//!
//! let task = Task {
//!     id: 1,
//!     weekday: parse_weekday("Monday")?,
//!     description: "Morning run".to_string(),
//! };
//! let record = CompletionRecord::new(date!(2024-01-01), task.id, true);
//! assert!(record.completed);
//! # Ok::<(), cadence_types::ParseError>(())
//! ```

pub mod error;
pub mod types;

pub use error::{ParseError, ParseResult};
pub use types::{
    CompletionRecord, DATE_FORMAT, Task, WEEK, format_date, parse_date, parse_weekday,
    weekday_name,
};
