//! Error types for data parsing in cadence-types.

use thiserror::Error;

/// Errors that can occur when parsing stored task-tracker data.
///
/// This error type covers only the textual representations used by the
/// storage layer (weekday names and calendar dates); database errors
/// belong in cadence-store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The string is not a recognized weekday name.
    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    /// The string is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

/// Result type alias using cadence-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
