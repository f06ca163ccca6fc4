//! The `VertiportEnv` episode wrapper.

use vp_core::Action;
use vp_events::EventWriter;
use vp_layout::ScenarioConfig;
use vp_sim::{Snapshot, VertiportSim};

use crate::reward::{project_reward, Difficulty, RewardWeights};
use crate::{EnvResult, Observation};

/// The result of one environment step.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    pub observation: Observation,
    pub reward: f64,
    /// A collision occurred or every drone finished.
    pub terminated: bool,
    /// The step budget ran out.
    pub truncated: bool,
}

/// Episodic wrapper around [`VertiportSim`]: derives rewards from
/// consecutive snapshots, decides termination/truncation, and flushes the
/// event log to an optional sink exactly once per episode.
///
/// Owns its engine exclusively; run one `VertiportEnv` per thread to
/// parallelize episodes.
pub struct VertiportEnv {
    sim: VertiportSim,
    difficulty: Difficulty,
    weights: RewardWeights,
    holding_point_count: usize,

    current_step: u64,
    prev_snapshot: Snapshot,

    event_writer: Option<Box<dyn EventWriter + Send>>,
    flushed: bool,
}

impl VertiportEnv {
    /// Build an environment from a scenario at the given difficulty.
    pub fn new(config: &ScenarioConfig, difficulty: Difficulty) -> EnvResult<Self> {
        let sim = VertiportSim::new(config)?;
        let prev_snapshot = sim.snapshot();
        Ok(Self {
            sim,
            difficulty,
            weights: difficulty.weights(),
            holding_point_count: config.vertiport.holding_point_count(),
            current_step: 0,
            prev_snapshot,
            event_writer: None,
            flushed: false,
        })
    }

    /// Attach an event sink.  The log is flushed to it exactly once, at the
    /// first tick where the episode terminates or truncates.
    pub fn with_event_writer(mut self, writer: Box<dyn EventWriter + Send>) -> Self {
        self.event_writer = Some(writer);
        self
    }

    /// Start a fresh episode and return its initial observation.
    pub fn reset(&mut self) -> Observation {
        self.prev_snapshot = self.sim.reset();
        self.current_step = 0;
        self.flushed = false;
        self.observation(&self.prev_snapshot)
    }

    /// Advance one tick with `actions` (one per drone).
    pub fn step(&mut self, actions: &[Action]) -> EnvResult<StepOutcome> {
        self.current_step += 1;

        let current = self.sim.step(actions)?;

        let terminated = current.collision || current.all_finished();
        let truncated = self.current_step >= self.sim.params().max_steps;

        let min_separation = self.sim.params().min_separation;
        let now_secs = self.sim.elapsed_secs();
        let reward = project_reward(
            &self.prev_snapshot,
            &current,
            &self.weights,
            min_separation,
            self.current_step,
            now_secs,
            self.sim.log_mut(),
        );

        if (terminated || truncated) && !self.flushed {
            if let Some(writer) = self.event_writer.as_mut() {
                self.sim.log().flush_to(writer.as_mut())?;
            }
            self.flushed = true;
        }

        let observation = self.observation(&current);
        self.prev_snapshot = current;

        Ok(StepOutcome { observation, reward, terminated, truncated })
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    /// The engine, for inspection (event log, parameters, snapshots).
    pub fn sim(&self) -> &VertiportSim {
        &self.sim
    }

    /// The snapshot taken at the end of the most recent step (or reset).
    pub fn last_snapshot(&self) -> &Snapshot {
        &self.prev_snapshot
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn observation(&self, snapshot: &Snapshot) -> Observation {
        Observation::from_snapshot(
            snapshot,
            self.sim.params().sensor_range,
            self.holding_point_count,
        )
    }
}
