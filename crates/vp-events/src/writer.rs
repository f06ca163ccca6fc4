//! The `EventWriter` trait implemented by all export backends.

use crate::{Event, EventResult};

/// Trait implemented by the CSV and SQLite event exporters.
pub trait EventWriter {
    /// Write a batch of events, in order.
    fn write_events(&mut self, events: &[Event]) -> EventResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> EventResult<()>;
}
