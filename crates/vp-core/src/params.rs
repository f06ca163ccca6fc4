//! Simulation parameter set.

use crate::{VpError, VpResult};

/// Physical and procedural constants for one simulation instance.
///
/// Typically embedded in a scenario file and deserialized by the application;
/// every field has a default so partial scenario files stay valid.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimParams {
    /// Integration step Δt, simulated seconds per tick.
    pub time_step: f64,

    /// Commanded cruise speed, m/s.  Drones fly at exactly this speed or
    /// hover; there is no acceleration model.
    pub drone_speed: f64,

    /// Physical radius of one drone, m.  Two drones closer than twice this
    /// value have collided.
    pub drone_radius: f64,

    /// Minimum safe separation between any two airborne drones, m.  Closer
    /// (but not touching) is a loss of separation.
    pub min_separation: f64,

    /// A waypoint counts as reached when the drone is within this radius, m.
    pub arrival_radius: f64,

    /// How long a drone must remain on its pad before departure, simulated
    /// seconds.
    pub ground_time: f64,

    /// Range within which two drones can sense each other, m.  Only the
    /// observation's adjacency matrix consumes this.
    pub sensor_range: f64,

    /// Episode step budget; the episode is truncated once this many ticks
    /// have elapsed.
    pub max_steps: u64,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            time_step:      0.1,
            drone_speed:    5.0,
            drone_radius:   0.5,
            min_separation: 6.0,
            arrival_radius: 1.0,
            ground_time:    5.0,
            sensor_range:   20.0,
            max_steps:      1_000,
        }
    }
}

impl SimParams {
    /// Fail fast on parameters that would make the engine degenerate.
    ///
    /// All strictly-positive constraints are checked here once, at
    /// construction, so the tick pipeline never re-validates.
    pub fn validate(&self) -> VpResult<()> {
        fn positive(name: &str, v: f64) -> VpResult<()> {
            if v > 0.0 && v.is_finite() {
                Ok(())
            } else {
                Err(VpError::Config(format!("{name} must be > 0, got {v}")))
            }
        }

        positive("time_step", self.time_step)?;
        positive("drone_speed", self.drone_speed)?;
        positive("drone_radius", self.drone_radius)?;
        positive("min_separation", self.min_separation)?;
        positive("arrival_radius", self.arrival_radius)?;
        positive("ground_time", self.ground_time)?;
        positive("sensor_range", self.sensor_range)?;
        if self.max_steps == 0 {
            return Err(VpError::Config("max_steps must be > 0".into()));
        }
        Ok(())
    }
}
