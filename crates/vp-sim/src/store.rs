//! Structure-of-Arrays storage for all per-drone working state.

use vp_core::{FlightState, Vec3};

/// Per-drone working state, one entry per SoA `Vec`.
///
/// Every `Vec` field has exactly `count` elements; the `DroneId` value is the
/// index into all of them:
///
/// ```ignore
/// let pos = store.positions[drone.index()];  // O(1), cache-friendly
/// ```
///
/// Mutated only by the engine during its own tick; everything external
/// consumers see goes through [`Snapshot`][crate::Snapshot].
pub struct DroneStore {
    /// Number of drones.  Equals the length of every SoA `Vec`.
    pub count: usize,

    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    /// Telemetry only — derived from the velocity delta, never fed back into
    /// motion.
    pub accelerations: Vec<Vec3>,

    /// Index into the active flight plan (arrival or departure, depending on
    /// `states`).  Never regresses within a phase; reset to 1 exactly once,
    /// on the pad-to-departure transition.
    pub waypoint_indices: Vec<usize>,

    pub states: Vec<FlightState>,

    /// `true` while the drone holds position (commanded or forced).
    pub hovering: Vec<bool>,
    /// Number of distinct hover episodes — incremented on the rising edge of
    /// a commanded hover, not per tick.
    pub hover_counts: Vec<u32>,

    /// Latched by the clearance pass; cleared the instant it is consumed.
    pub clearance_granted: Vec<bool>,

    /// Seconds accumulated on the pad since landing.
    pub ground_times: Vec<f64>,
}

impl DroneStore {
    /// Allocate a store for `count` drones, everything zeroed and all states
    /// [`FlightState::Inactive`].  The engine's `reset` activates the fleet.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            positions: vec![Vec3::ZERO; count],
            velocities: vec![Vec3::ZERO; count],
            accelerations: vec![Vec3::ZERO; count],
            waypoint_indices: vec![1; count],
            states: vec![FlightState::Inactive; count],
            hovering: vec![false; count],
            hover_counts: vec![0; count],
            clearance_granted: vec![false; count],
            ground_times: vec![0.0; count],
        }
    }

}
