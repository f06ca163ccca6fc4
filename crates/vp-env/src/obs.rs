//! The per-tick controller observation.

use vp_sim::Snapshot;

/// Features per drone in [`Observation::drones_state`]: position (3),
/// velocity (3), acceleration (3), target waypoint (3), hovering flag,
/// hover count, state code, clearance flag.
pub const DRONE_FEATURES: usize = 16;

/// The flattened, well-formed view of one snapshot handed to controllers.
///
/// Everything is finite by construction: the distance matrix is
/// sentinel-clamped in `vp-sim`, and the remaining fields are copies of
/// engine state that never goes non-finite.  The infrastructure vector is
/// FATO occupancy followed by a zero-filled holding-point placeholder of the
/// correct width — holding occupancy is not tracked, but consumers get a
/// fixed-width field rather than a missing one.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    drone_count: usize,
    fato_count: usize,

    /// One feature row per drone; see [`DRONE_FEATURES`].
    pub drones_state: Vec<[f64; DRONE_FEATURES]>,

    /// Row-major N×N pairwise distances, sentinel on the diagonal.
    pub distances: Vec<f64>,

    /// Row-major N×N sensor adjacency: `0 < distance < sensor_range`.
    /// The self-pair is excluded by the strict lower bound.
    pub adjacency: Vec<bool>,

    /// FATO occupancy (1.0/0.0) followed by one zero per holding point.
    pub infrastructure: Vec<f64>,
}

impl Observation {
    /// Build an observation from a snapshot.
    ///
    /// `holding_point_count` fixes the width of the zero-filled placeholder
    /// tail of [`Observation::infrastructure`].
    pub fn from_snapshot(
        snapshot: &Snapshot,
        sensor_range: f64,
        holding_point_count: usize,
    ) -> Self {
        let n = snapshot.drone_count();
        let fato_count = snapshot.fato_occupancy.len();

        let drones_state = (0..n)
            .map(|i| {
                let p = snapshot.positions[i];
                let v = snapshot.velocities[i];
                let a = snapshot.accelerations[i];
                let t = snapshot.target_waypoints[i];
                [
                    p.x, p.y, p.z,
                    v.x, v.y, v.z,
                    a.x, a.y, a.z,
                    t.x, t.y, t.z,
                    snapshot.hovering[i] as u8 as f64,
                    snapshot.hover_counts[i] as f64,
                    snapshot.states[i].code() as f64,
                    snapshot.clearance_granted[i] as u8 as f64,
                ]
            })
            .collect();

        let mut distances = Vec::with_capacity(n * n);
        let mut adjacency = Vec::with_capacity(n * n);
        for i in 0..n {
            for &d in snapshot.distances.row(i) {
                distances.push(d);
                adjacency.push(d > 0.0 && d < sensor_range);
            }
        }

        let mut infrastructure = Vec::with_capacity(fato_count + holding_point_count);
        infrastructure.extend(
            snapshot
                .fato_occupancy
                .iter()
                .map(|&occupied| occupied as u8 as f64),
        );
        // Holding-point occupancy stub: fixed width, always zero.
        infrastructure.extend(std::iter::repeat_n(0.0, holding_point_count));

        Self {
            drone_count: n,
            fato_count,
            drones_state,
            distances,
            adjacency,
            infrastructure,
        }
    }

    pub fn drone_count(&self) -> usize {
        self.drone_count
    }

    pub fn fato_count(&self) -> usize {
        self.fato_count
    }

    /// The state code of drone `i` (see [`vp_core::FlightState::code`]).
    pub fn state_code(&self, i: usize) -> u8 {
        self.drones_state[i][14] as u8
    }

    /// `true` if FATO `f` is occupied.
    pub fn fato_occupied(&self, f: usize) -> bool {
        self.infrastructure[f] > 0.0
    }

    /// Distance between drones `i` and `j`.
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.drone_count + j]
    }
}
