//! Core types for tasks and completion records.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Storage format for calendar dates (`2024-01-31`).
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// The week in display order, Monday first.
///
/// All per-weekday output follows this order so that tables and charts
/// line up regardless of which weekdays actually have data.
pub const WEEK: [Weekday; 7] = [
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
];

/// A recurring to-do item assigned to one weekday of the week.
///
/// Tasks are immutable once created; the only lifecycle operation besides
/// creation is deletion. Identity is the integer id assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Task {
    /// Row id assigned by the store.
    pub id: i64,
    /// Weekday this task recurs on.
    pub weekday: Weekday,
    /// Free-text task description.
    pub description: String,
}

/// A dated true/false completion marker for one task on one calendar date.
///
/// `(date, task_id)` is the natural key: writing the same pair again
/// overwrites rather than appends. A record may reference a task that has
/// since been deleted; consumers must tolerate such dangling references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompletionRecord {
    /// Calendar date the task was (or was not) completed on.
    pub date: Date,
    /// Id of the referenced task.
    pub task_id: i64,
    /// Whether the task was checked off on that date.
    pub completed: bool,
}

impl CompletionRecord {
    /// Create a record for one `(date, task)` pair.
    pub fn new(date: Date, task_id: i64, completed: bool) -> Self {
        Self {
            date,
            task_id,
            completed,
        }
    }
}

/// Format a date in the `YYYY-MM-DD` storage format.
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parse a `YYYY-MM-DD` date string.
///
/// # Examples
///
/// ```
/// use cadence_types::parse_date;
/// use time::macros::date;
///
/// assert_eq!(parse_date("2024-01-31"), Ok(date!(2024-01-31)));
/// assert!(parse_date("31/01/2024").is_err());
/// ```
pub fn parse_date(s: &str) -> Result<Date, ParseError> {
    Date::parse(s, DATE_FORMAT).map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// The English weekday name used for storage and display.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Monday",
        Weekday::Tuesday => "Tuesday",
        Weekday::Wednesday => "Wednesday",
        Weekday::Thursday => "Thursday",
        Weekday::Friday => "Friday",
        Weekday::Saturday => "Saturday",
        Weekday::Sunday => "Sunday",
    }
}

/// Parse a weekday from its English name.
///
/// Matching is case-insensitive and accepts the common three-letter
/// abbreviations.
///
/// # Examples
///
/// ```
/// use cadence_types::parse_weekday;
/// use time::Weekday;
///
/// assert_eq!(parse_weekday("Monday"), Ok(Weekday::Monday));
/// assert_eq!(parse_weekday("fri"), Ok(Weekday::Friday));
/// assert!(parse_weekday("someday").is_err());
/// ```
pub fn parse_weekday(s: &str) -> Result<Weekday, ParseError> {
    match s.to_ascii_lowercase().as_str() {
        "monday" | "mon" => Ok(Weekday::Monday),
        "tuesday" | "tue" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" => Ok(Weekday::Wednesday),
        "thursday" | "thu" => Ok(Weekday::Thursday),
        "friday" | "fri" => Ok(Weekday::Friday),
        "saturday" | "sat" => Ok(Weekday::Saturday),
        "sunday" | "sun" => Ok(Weekday::Sunday),
        _ => Err(ParseError::UnknownWeekday(s.to_string())),
    }
}
