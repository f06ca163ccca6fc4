//! The per-drone mission state machine.
//!
//! # Transition graph
//!
//! ```text
//! Inactive → EnRouteToEntry → AwaitingClearance → ClearedToLand → OnPad
//!                                                                   │
//!                                   Finished ← EnRouteToExit ◄──────┘
//! ```
//!
//! `EnRouteToPad` is declared for wire/data compatibility but no transition
//! produces it; see the variant doc.

/// Mission state of one drone.
///
/// The numeric codes appear verbatim in observations and event exports and
/// must stay stable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum FlightState {
    /// Not yet activated.  Only observable before the first `reset()`.
    #[default]
    Inactive = 0,
    /// Flying the arrival plan from the entry gate toward the holding point.
    EnRouteToEntry = 1,
    /// Holding position at the holding point, waiting for clearance.
    AwaitingClearance = 2,
    /// Clearance consumed; flying the final arrival segment to the pad.
    ClearedToLand = 3,
    /// Reserved.  Declared in the state space for compatibility with
    /// external consumers but unreachable — no transition produces it.
    EnRouteToPad = 4,
    /// Occupying the assigned FATO, accruing ground time.
    OnPad = 5,
    /// Flying the departure plan from the pad toward the exit gate.
    EnRouteToExit = 6,
    /// Mission complete; the drone no longer participates in the episode.
    Finished = 7,
}

impl FlightState {
    /// The state's numeric code as exposed in observations.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// States in which the engine pins the drone in place: velocity is forced
    /// to zero regardless of the commanded action.
    #[inline]
    pub fn holds_position(self) -> bool {
        matches!(
            self,
            FlightState::Finished
                | FlightState::Inactive
                | FlightState::AwaitingClearance
                | FlightState::OnPad
        )
    }

    /// States whose target waypoint comes from the arrival plan.
    #[inline]
    pub fn on_arrival_leg(self) -> bool {
        matches!(
            self,
            FlightState::EnRouteToEntry
                | FlightState::AwaitingClearance
                | FlightState::ClearedToLand
        )
    }

    /// States whose target waypoint comes from the departure plan.
    #[inline]
    pub fn on_departure_leg(self) -> bool {
        matches!(self, FlightState::OnPad | FlightState::EnRouteToExit)
    }

    /// Human-readable label for logs and exports.
    pub fn as_str(self) -> &'static str {
        match self {
            FlightState::Inactive          => "inactive",
            FlightState::EnRouteToEntry    => "en_route_to_entry",
            FlightState::AwaitingClearance => "awaiting_clearance",
            FlightState::ClearedToLand     => "cleared_to_land",
            FlightState::EnRouteToPad      => "en_route_to_pad",
            FlightState::OnPad             => "on_pad",
            FlightState::EnRouteToExit     => "en_route_to_exit",
            FlightState::Finished          => "finished",
        }
    }
}

impl std::fmt::Display for FlightState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
