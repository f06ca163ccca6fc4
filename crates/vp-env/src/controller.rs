//! The `Controller` trait — the main extension point for user code — and
//! baseline implementations.

use vp_core::{Action, FlightState, SimRng};

use crate::Observation;

/// Pluggable per-episode decision logic.
///
/// Implement this trait to define how one action per drone is chosen each
/// tick.  Controllers see only the [`Observation`] — never engine internals
/// — so anything a trained policy could act on, a scripted controller can
/// act on too.
///
/// Controllers must be `Send`: the evaluation harness moves each one onto
/// the thread running its episode.
pub trait Controller: Send {
    /// Choose one action per drone for the current tick.
    fn act(&mut self, observation: &Observation) -> Vec<Action>;

    /// Reset internal state for a new episode.  Default: nothing to reset.
    fn reset(&mut self) {}
}

// ── GreedyController ─────────────────────────────────────────────────────────

/// Commands `Continue` for every drone, every tick, and never grants
/// clearance.  The simplest possible baseline: arrivals pile up at the
/// holding point and the episode runs out its step budget.
pub struct GreedyController;

impl Controller for GreedyController {
    fn act(&mut self, observation: &Observation) -> Vec<Action> {
        vec![Action::Continue; observation.drone_count()]
    }
}

// ── FcfsController ───────────────────────────────────────────────────────────

/// First-come-first-served tower logic.
///
/// Every drone is commanded `Continue`, except that each tick the
/// lowest-indexed drone holding at `AwaitingClearance` whose assigned FATO
/// is currently free receives `GrantClearance` — at most one grant per FATO
/// per tick, so the pad queue drains in arrival order.
pub struct FcfsController;

impl Controller for FcfsController {
    fn act(&mut self, observation: &Observation) -> Vec<Action> {
        let n = observation.drone_count();
        let fato_count = observation.fato_count();
        let mut actions = vec![Action::Continue; n];
        let mut granted = vec![false; fato_count];

        for i in 0..n {
            if observation.state_code(i) != FlightState::AwaitingClearance.code() {
                continue;
            }
            // Round-robin pad assignment mirrors plan generation.
            let fato = i % fato_count;
            if !observation.fato_occupied(fato) && !granted[fato] {
                actions[i] = Action::GrantClearance;
                granted[fato] = true;
            }
        }

        actions
    }
}

// ── RandomController ─────────────────────────────────────────────────────────

/// Uniform random actions from a seeded RNG.  Useful as a worst-case
/// baseline and for fuzzing the engine with adversarial action sequences.
pub struct RandomController {
    rng: SimRng,
}

impl RandomController {
    pub fn new(seed: u64) -> Self {
        Self { rng: SimRng::new(seed) }
    }

    /// Seeded for episode `episode` of a run — see [`SimRng::for_episode`].
    pub fn for_episode(root_seed: u64, episode: u64) -> Self {
        Self { rng: SimRng::for_episode(root_seed, episode) }
    }
}

impl Controller for RandomController {
    fn act(&mut self, observation: &Observation) -> Vec<Action> {
        (0..observation.drone_count())
            .map(|_| {
                let index = self.rng.gen_range(0..Action::COUNT);
                Action::from_index(index).unwrap_or_default()
            })
            .collect()
    }
}
