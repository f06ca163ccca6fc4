//! Error types for vp-layout.

use thiserror::Error;

/// Errors raised while loading or validating a scenario configuration.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A count constraint was violated (empty required list, zero drone
    /// count, dangling reference).  Fatal at construction.
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, LayoutError>`.
pub type LayoutResult<T> = Result<T, LayoutError>;
