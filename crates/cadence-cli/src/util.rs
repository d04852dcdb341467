//! Small helpers shared by commands.

use anyhow::Result;
use time::{Date, OffsetDateTime};

use cadence_types::parse_date;

/// Today's date from the local clock, falling back to UTC when the local
/// offset cannot be determined.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn resolve_date(arg: Option<String>) -> Result<Date> {
    match arg {
        Some(s) => Ok(parse_date(&s)?),
        None => Ok(today()),
    }
}
