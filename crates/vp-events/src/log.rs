//! The in-memory `EventLog`.

use vp_core::DroneId;

use crate::writer::EventWriter;
use crate::{Event, EventKind, EventResult};

/// An append-only record of domain events, scoped to one engine instance.
///
/// Events accumulate in memory during an episode and are exported through an
/// [`EventWriter`] by the episode layer.  `clear` is called on engine reset
/// so each episode starts with an empty log.
#[derive(Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event.
    pub fn record(
        &mut self,
        timestamp_secs: f64,
        kind: EventKind,
        drone: Option<DroneId>,
        detail: Option<String>,
    ) {
        self.events.push(Event { timestamp_secs, kind, drone, detail });
    }

    /// Append an event with no detail text.
    #[inline]
    pub fn record_for(&mut self, timestamp_secs: f64, kind: EventKind, drone: DroneId) {
        self.record(timestamp_secs, kind, Some(drone), None);
    }

    /// Read-only slice of all recorded events, in recording order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of recorded events of `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Drop all recorded events.  Called on engine reset.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Write every recorded event through `writer` and close it.
    ///
    /// The log itself is left intact — flushing is an export, not a drain.
    pub fn flush_to<W: EventWriter + ?Sized>(&self, writer: &mut W) -> EventResult<()> {
        writer.write_events(&self.events)?;
        writer.finish()
    }
}
