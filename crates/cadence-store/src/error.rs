//! Error types for cadence-store.

use std::path::PathBuf;

/// Result type for cadence-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in cadence-store.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Database error from SQLite.
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Failed to create database directory.
    #[error("Failed to create database directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A stored date or weekday failed to parse.
    ///
    /// One corrupt value rejects the whole read; rows are never
    /// silently dropped.
    #[error("Corrupt stored value: {0}")]
    Corrupt(#[from] cadence_types::ParseError),

    /// CSV error during export or import.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
