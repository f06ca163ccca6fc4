//! Scenario configuration: layout + traffic profile + simulation parameters.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use vp_core::SimParams;

use crate::{LayoutError, LayoutResult, VertiportLayout};

// ── TrafficProfile ───────────────────────────────────────────────────────────

/// The shape of demand over an episode.
///
/// Only `max_drones` is consumed by the engine in the current scope — all
/// drones are active the instant a reset completes.  The arrival-rate and
/// spawn-interval fields describe staggered spawning, which is declared here
/// for scenario-file compatibility and validated, but not yet simulated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrafficProfileType {
    SteadyFlow,
    SuddenInflux,
    PeakHours,
}

/// Traffic demand parameters for one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficProfile {
    pub profile_type: TrafficProfileType,
    /// λ for the (not yet simulated) Poisson arrival process, drones/s.
    pub arrival_rate: f64,
    /// Number of drones in the episode.
    pub max_drones: usize,
    /// Ticks between spawn attempts for staggered profiles.
    pub spawn_interval: u64,
}

impl TrafficProfile {
    pub fn validate(&self) -> LayoutResult<()> {
        if self.max_drones == 0 {
            return Err(LayoutError::Config("max_drones must be > 0".into()));
        }
        if !(self.arrival_rate > 0.0) {
            return Err(LayoutError::Config(format!(
                "arrival_rate must be > 0, got {}",
                self.arrival_rate
            )));
        }
        if self.spawn_interval == 0 {
            return Err(LayoutError::Config("spawn_interval must be > 0".into()));
        }
        Ok(())
    }
}

// ── ScenarioConfig ───────────────────────────────────────────────────────────

/// Everything the engine needs to run one scenario.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub vertiport: VertiportLayout,
    pub traffic: TrafficProfile,
    /// Omitted fields take [`SimParams::default`] values.
    #[serde(default)]
    pub simulation: SimParams,
}

impl ScenarioConfig {
    /// Validate every embedded structure.  Called by the JSON loaders; call
    /// it directly when constructing a config programmatically.
    pub fn validate(&self) -> LayoutResult<()> {
        self.vertiport.validate()?;
        self.traffic.validate()?;
        self.simulation
            .validate()
            .map_err(|e| LayoutError::Config(e.to_string()))?;
        Ok(())
    }

    /// Deserialize and validate a scenario from any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`) or loading embedded
    /// scenario strings.
    pub fn from_json_reader<R: Read>(reader: R) -> LayoutResult<Self> {
        let config: ScenarioConfig =
            serde_json::from_reader(reader).map_err(|e| LayoutError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Deserialize and validate a scenario from a JSON file.
    pub fn from_json_file(path: &Path) -> LayoutResult<Self> {
        let file = std::fs::File::open(path).map_err(LayoutError::Io)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}
