//! Error types for vp-events.

use thiserror::Error;

/// Errors that can occur when exporting the event log.
#[derive(Debug, Error)]
pub enum EventError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "sqlite")]
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Alias for `Result<T, EventError>`.
pub type EventResult<T> = Result<T, EventError>;
