//! The `FlightPlan` waypoint sequence.

use vp_core::Vec3;

/// An ordered waypoint sequence for one drone and one direction.
///
/// Positional conventions (relied on by the engine's state machine):
///
/// - **Arrival plans**: index 0 is the entry gate, the second-to-last index
///   is the holding point, and the last index is the FATO.
/// - **Departure plans**: index 0 is the FATO and the last index is the exit
///   gate.
///
/// Plans always hold at least three waypoints — a gate, at least one
/// approach waypoint, and a pad — which keeps the holding point distinct
/// from the gate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightPlan {
    waypoints: Vec<Vec3>,
}

impl FlightPlan {
    /// Construct a plan from an ordered waypoint list.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if fewer than three waypoints are supplied;
    /// the generator never does (it requires a non-empty approach path).
    pub fn new(waypoints: Vec<Vec3>) -> Self {
        debug_assert!(
            waypoints.len() >= 3,
            "a flight plan needs a gate, an approach waypoint, and a pad"
        );
        Self { waypoints }
    }

    /// Waypoint at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.  The engine clamps indices via the
    /// state machine, so in-range access is an invariant, not a runtime
    /// question.
    #[inline]
    pub fn waypoint(&self, index: usize) -> Vec3 {
        self.waypoints[index]
    }

    /// The first waypoint (entry gate for arrivals, FATO for departures).
    #[inline]
    pub fn first(&self) -> Vec3 {
        self.waypoints[0]
    }

    /// Index of the final waypoint.
    #[inline]
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// Index of the second-to-last waypoint — the holding point on arrival
    /// plans.
    #[inline]
    pub fn holding_index(&self) -> usize {
        self.waypoints.len() - 2
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }
}
