//! `vp-plan` — flight plans and their generation.
//!
//! A [`FlightPlan`] is an ordered, fixed-length waypoint sequence for one
//! drone and one direction.  [`PlanSet::generate`] builds one arrival and one
//! departure plan per drone from a validated layout, once per engine
//! construction:
//!
//! ```text
//! arrival   = [entry gate, …approach waypoints…, FATO]
//! departure = [FATO, …reversed approach waypoints…, exit gate]
//! ```
//!
//! Assignment is deterministic round-robin on the drone index (drone *i* →
//! FATO `i mod F`, gate `i mod G`); no randomness, so episodes are
//! reproducible by construction.  Plans are immutable for the episode and
//! owned exclusively by the engine.

pub mod error;
pub mod generator;
pub mod plan;


pub use error::{PlanError, PlanResult};
pub use generator::PlanSet;
pub use plan::FlightPlan;
