//! Framework error type.
//!
//! Sub-crates may define their own error enums and convert them into `VpError`
//! via `From` impls, or keep them separate and wrap `VpError` as one variant.
//! Both patterns are acceptable; prefer whichever keeps error sites clean.

use thiserror::Error;

/// The top-level error type for `vp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum VpError {
    /// Malformed or degenerate configuration — fatal, raised at
    /// construction, never recovered internally.
    #[error("configuration error: {0}")]
    Config(String),

    /// A safety invariant that the tick pipeline is supposed to make
    /// unviolable was observed violated.  Always a defect; surfaced, never
    /// silently corrected.
    #[error("invariant violation: {0}")]
    Invariant(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `vp-*` crates.
pub type VpResult<T> = Result<T, VpError>;
