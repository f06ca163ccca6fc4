//! Curriculum difficulty levels and the reward projection.
//!
//! The reward is a pure function of two consecutive snapshots plus a
//! [`RewardWeights`] table selected by [`Difficulty`].  Safety events
//! discovered during projection (collision, procedure violation) are
//! appended to the engine's event log as a side channel.

use vp_core::{DroneId, FlightState};
use vp_events::{EventKind, EventLog};
use vp_sim::Snapshot;

/// Reward for one completed mission, identical across difficulty levels.
pub const MISSION_REWARD: f64 = 100.0;

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Curriculum difficulty.  Selects a fixed penalty/reward table; no raw
/// magic-number branching happens at reward-computation sites.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Difficulty {
    /// Gentle penalties, progress shaping on, procedure violations free.
    Easy,
    /// Moderate penalties, reduced shaping.
    Intermediate,
    /// Full penalties, no shaping.  The default for evaluation.
    #[default]
    Hard,
}

impl Difficulty {
    /// Map a scenario-file curriculum level to a difficulty (1 → Easy,
    /// 2 → Intermediate, everything above → Hard).
    pub fn from_level(level: u8) -> Difficulty {
        match level {
            0 | 1 => Difficulty::Easy,
            2 => Difficulty::Intermediate,
            _ => Difficulty::Hard,
        }
    }

    /// The penalty/reward table for this difficulty.
    pub fn weights(self) -> RewardWeights {
        match self {
            Difficulty::Easy => RewardWeights {
                collision_penalty:    10.0,
                unauthorized_penalty: 0.0,
                los_factor:           0.1,
                progress_reward:      1.0,
                time_penalty:         0.05,
            },
            Difficulty::Intermediate => RewardWeights {
                collision_penalty:    100.0,
                unauthorized_penalty: 500.0,
                los_factor:           0.3,
                progress_reward:      0.5,
                time_penalty:         0.1,
            },
            Difficulty::Hard => RewardWeights {
                collision_penalty:    1000.0,
                unauthorized_penalty: 5000.0,
                los_factor:           0.5,
                progress_reward:      0.0,
                time_penalty:         0.1,
            },
        }
    }
}

/// The penalty/reward table for one difficulty level.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RewardWeights {
    /// Subtracted once per tick in which the collision flag is set.
    pub collision_penalty: f64,
    /// Subtracted per drone observed `OnPad` without a prior clearance flag.
    /// Zero disables the check (and its event).
    pub unauthorized_penalty: f64,
    /// Per-pair factor on `(min_separation − distance)` for pairs inside the
    /// separation envelope.
    pub los_factor: f64,
    /// Factor on per-drone distance-to-target improvement; zero disables
    /// shaping.
    pub progress_reward: f64,
    /// Subtracted per non-finished drone per tick.
    pub time_penalty: f64,
}

// ── Projection ───────────────────────────────────────────────────────────────

/// Project a scalar reward from two consecutive snapshots.
///
/// `step` and `now_secs` only label the emitted events; the reward itself
/// depends on the snapshots and weights alone.
///
/// The unauthorized-landing term compares against the *previous* snapshot's
/// clearance flag.  Because the engine clears that flag the instant
/// clearance is consumed, the flag is false by landing time for every drone
/// — compliant or not — so at non-zero penalty every landing is charged.
/// The rule is preserved to the letter; see DESIGN.md before changing it.
pub fn project_reward(
    prev: &Snapshot,
    current: &Snapshot,
    weights: &RewardWeights,
    min_separation: f64,
    step: u64,
    now_secs: f64,
    log: &mut EventLog,
) -> f64 {
    let n = current.drone_count();
    let mut reward = 0.0;

    // Collision.
    if current.collision {
        reward -= weights.collision_penalty;
        log.record(
            now_secs,
            EventKind::CollisionDetected,
            None,
            Some(format!("collision detected at step {step}")),
        );
    }

    // Loss of separation, per unordered pair, scaled by severity.
    for (_, _, distance) in current.distances.pairs_below(min_separation) {
        reward -= (min_separation - distance) * weights.los_factor;
    }

    // Procedure violation: on the pad without a prior clearance flag.
    if weights.unauthorized_penalty > 0.0 {
        for i in 0..n {
            if current.states[i] == FlightState::OnPad && !prev.clearance_granted[i] {
                reward -= weights.unauthorized_penalty;
                log.record(
                    now_secs,
                    EventKind::UnauthorizedLanding,
                    Some(DroneId(i as u32)),
                    Some("landed without clearance".into()),
                );
            }
        }
    }

    // Throughput: newly finished missions.
    for i in 0..n {
        if current.states[i] == FlightState::Finished
            && prev.states[i] != FlightState::Finished
        {
            reward += MISSION_REWARD;
        }
    }

    // Progress shaping toward the current target.
    if weights.progress_reward > 0.0 {
        for i in 0..n {
            if current.states[i] == FlightState::Finished {
                continue;
            }
            let target = current.target_waypoints[i];
            let current_dist = target.distance(current.positions[i]);
            let prev_dist = target.distance(prev.positions[i]);
            if current_dist < prev_dist {
                reward += weights.progress_reward * (prev_dist - current_dist);
            }
        }
    }

    // Time in system.
    for i in 0..n {
        if current.states[i] != FlightState::Finished {
            reward -= weights.time_penalty;
        }
    }

    reward
}
