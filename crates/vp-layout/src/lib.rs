//! `vp-layout` — vertiport layout and scenario configuration.
//!
//! The layout is an immutable description of the physical vertiport: FATOs
//! (landing pads) with their approach paths, holding points, and airspace
//! gates.  A [`ScenarioConfig`] bundles a layout with a traffic profile and
//! the simulation parameter set, and is the single input the engine consumes.
//!
//! All count constraints are checked once, by [`ScenarioConfig::validate`]
//! (or the JSON loaders, which validate after deserializing).  Downstream
//! crates may assume a validated config: no list it contains is empty.
//!
//! # Scenario JSON format
//!
//! ```json
//! {
//!   "vertiport": {
//!     "fatos": [
//!       { "id": 0, "position": { "x": 0.0, "y": 0.0, "z": 0.0 },
//!         "approach_path": [ { "x": 0.0, "y": 10.0, "z": 20.0 },
//!                            { "x": 0.0, "y": 5.0,  "z": 10.0 } ] }
//!     ],
//!     "holding_points": [
//!       { "id": 0, "position": { "x": 0.0, "y": 10.0, "z": 20.0 }, "fato": 0 }
//!     ],
//!     "gates": [
//!       { "id": 0, "position": { "x": -20.0, "y": 20.0, "z": 30.0 },
//!         "is_entry": true, "is_exit": false },
//!       { "id": 1, "position": { "x": 20.0, "y": 20.0, "z": 30.0 },
//!         "is_entry": false, "is_exit": true }
//!     ]
//!   },
//!   "traffic": { "profile_type": "steady_flow", "arrival_rate": 0.5,
//!                "max_drones": 2, "spawn_interval": 10 },
//!   "simulation": { "time_step": 0.1, "min_separation": 6.0 }
//! }
//! ```
//!
//! `simulation` accepts any subset of [`vp_core::SimParams`] fields; omitted
//! fields take their defaults.

pub mod error;
pub mod layout;
pub mod scenario;


pub use error::{LayoutError, LayoutResult};
pub use layout::{Fato, Gate, HoldingPoint, VertiportLayout};
pub use scenario::{ScenarioConfig, TrafficProfile, TrafficProfileType};
