//! The read-only per-tick state projection.

use vp_core::{FlightState, Tick, Vec3};

use crate::DistanceMatrix;

/// A full projection of simulation state at one tick boundary.
///
/// Produced on demand by [`VertiportSim`][crate::VertiportSim]; holds copies,
/// so a snapshot stays valid (and comparable) across later steps.  The
/// reward projector consumes two consecutive snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Tick at which this projection was taken (number of completed steps).
    pub tick: Tick,

    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub accelerations: Vec<Vec3>,
    /// The waypoint each drone is currently flying toward.  Pinned drones
    /// (on a pad, finished, inactive) target their own position.
    pub target_waypoints: Vec<Vec3>,

    pub states: Vec<FlightState>,
    pub fato_occupancy: Vec<bool>,

    pub distances: DistanceMatrix,
    /// `true` iff any pair of drones is closer than `2 × drone_radius`.
    pub collision: bool,

    pub hovering: Vec<bool>,
    pub hover_counts: Vec<u32>,
    pub clearance_granted: Vec<bool>,
}

impl Snapshot {
    pub fn drone_count(&self) -> usize {
        self.positions.len()
    }

    /// `true` once every drone has reached [`FlightState::Finished`].
    pub fn all_finished(&self) -> bool {
        self.states.iter().all(|&s| s == FlightState::Finished)
    }

    /// Number of drones currently in `state`.
    pub fn count_in_state(&self, state: FlightState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }
}
