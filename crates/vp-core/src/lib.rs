//! `vp-core` — foundational types for the `vertisim` vertiport simulation
//! framework.
//!
//! This crate is a dependency of every other `vp-*` crate.  It intentionally
//! has no `vp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                               |
//! |------------|--------------------------------------------------------|
//! | [`ids`]    | `DroneId`, `FatoId`, `GateId`, `HoldingPointId`        |
//! | [`vec3`]   | `Vec3`, Euclidean distance                             |
//! | [`time`]   | `Tick`, `SimClock`                                     |
//! | [`params`] | `SimParams`                                            |
//! | [`action`] | `Action` — the per-drone controller action set         |
//! | [`state`]  | `FlightState` — the per-drone mission state machine    |
//! | [`rng`]    | `SimRng` — seeded RNG for controller-side stochastics  |
//! | [`error`]  | `VpError`, `VpResult`                                  |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                    |
//! |---------|-----------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.       |

pub mod action;
pub mod error;
pub mod ids;
pub mod params;
pub mod rng;
pub mod state;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use error::{VpError, VpResult};
pub use ids::{DroneId, FatoId, GateId, HoldingPointId};
pub use params::SimParams;
pub use rng::SimRng;
pub use state::FlightState;
pub use time::{SimClock, Tick};
pub use vec3::Vec3;
