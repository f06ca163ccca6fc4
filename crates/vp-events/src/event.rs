//! Domain event types.

use vp_core::DroneId;

/// The kind of a recorded domain event.
///
/// The string labels are part of the export format and must stay stable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    MissionStarted,
    MissionCompleted,
    LosDetected,
    CollisionDetected,
    ClearanceGranted,
    FatoOccupied,
    FatoVacated,
    HoldingPointReached,
    UnauthorizedLanding,
}

impl EventKind {
    /// Export label, one per variant.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::MissionStarted      => "mission_started",
            EventKind::MissionCompleted    => "mission_completed",
            EventKind::LosDetected         => "los_detected",
            EventKind::CollisionDetected   => "collision_detected",
            EventKind::ClearanceGranted    => "clearance_granted",
            EventKind::FatoOccupied        => "fato_occupied",
            EventKind::FatoVacated         => "fato_vacated",
            EventKind::HoldingPointReached => "holding_point_reached",
            EventKind::UnauthorizedLanding => "unauthorized_landing",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded domain event.  Never mutated once written.
///
/// `timestamp_secs` is simulated time (tick × Δt), not wall-clock time, so
/// re-running the same action sequence reproduces the log byte-for-byte.
#[derive(Clone, PartialEq, Debug)]
pub struct Event {
    pub timestamp_secs: f64,
    pub kind: EventKind,
    pub drone: Option<DroneId>,
    pub detail: Option<String>,
}
