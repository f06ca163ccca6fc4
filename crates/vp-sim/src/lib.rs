//! `vp-sim` — the deterministic vertiport tick pipeline.
//!
//! # Fixed-order tick pipeline
//!
//! ```text
//! for each step(actions):
//!   ① Clearance — GrantClearance actions latch clearance_granted for
//!                 drones in AwaitingClearance (before motion, so a grant
//!                 is consumable the same tick).
//!   ② Motion    — pinned states are zeroed; Hover/Continue set velocity;
//!                 Reserved actions are no-ops.
//!   ③ Kinematics— acceleration telemetry; explicit-Euler position update.
//!   ④ Ground    — OnPad drones accrue ground time.
//!   ⑤ Advance   — waypoint arrival and mission advancement in ascending
//!                 drone-index order; this order IS the pad-contention
//!                 tie-break and must never be parallelized.
//!   ⑥ Invariant — FATO mutual exclusion is verified; a violation is a
//!                 fatal error, never silently corrected.
//! ```
//!
//! The engine is single-threaded and synchronous: one `step` completes
//! before the next begins, and every ordering rule above is a total order
//! over drone indices.  Each [`VertiportSim`] owns its entire state
//! (plans, drone store, occupancy, event log) — no process-wide mutable
//! state exists, so callers parallelize by running one instance per thread.

pub mod error;
pub mod separation;
pub mod sim;
pub mod snapshot;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use separation::{DistanceMatrix, DISTANCE_SENTINEL};
pub use sim::VertiportSim;
pub use snapshot::Snapshot;
pub use store::DroneStore;
