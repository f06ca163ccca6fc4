//! Episode statistics and the multi-episode evaluation harness.
//!
//! Each episode owns a private engine instance, so episodes are trivially
//! independent; with the `parallel` feature they run on Rayon's thread pool
//! with zero shared simulation state.

use vp_core::FlightState;
use vp_events::EventKind;
use vp_layout::ScenarioConfig;

use crate::{Controller, Difficulty, EnvResult, VertiportEnv};

// ── EpisodeStats ─────────────────────────────────────────────────────────────

/// Metrics gathered from one completed episode.
#[derive(Clone, Debug)]
pub struct EpisodeStats {
    pub episode: u64,
    pub episode_length: u64,
    pub total_reward: f64,

    // Safety.
    /// Ticks on which the collision flag was set.
    pub collisions: usize,
    /// Pair-ticks inside the separation envelope (each violating pair counts
    /// once per tick it persists).
    pub los_violations: usize,
    pub unauthorized_landings: usize,

    // Efficiency.
    pub missions_completed: usize,
    /// Missions per simulated second.
    pub throughput: f64,

    pub final_states: Vec<FlightState>,
}

/// Run one full episode of `env` under `controller`.
///
/// Steps until the environment terminates or truncates; the environment's
/// own step budget bounds the loop.
pub fn run_episode(
    env: &mut VertiportEnv,
    controller: &mut dyn Controller,
    episode: u64,
) -> EnvResult<EpisodeStats> {
    controller.reset();
    let mut observation = env.reset();
    let min_separation = env.sim().params().min_separation;

    let mut total_reward = 0.0;
    let mut los_violations = 0;

    loop {
        let actions = controller.act(&observation);
        let outcome = env.step(&actions)?;
        total_reward += outcome.reward;
        los_violations += env
            .last_snapshot()
            .distances
            .pairs_below(min_separation)
            .len();
        observation = outcome.observation;
        if outcome.terminated || outcome.truncated {
            break;
        }
    }

    let log = env.sim().log();
    let elapsed = env.sim().elapsed_secs();
    let missions_completed = log.count(EventKind::MissionCompleted);

    Ok(EpisodeStats {
        episode,
        episode_length: env.current_step(),
        total_reward,
        collisions: log.count(EventKind::CollisionDetected),
        los_violations,
        unauthorized_landings: log.count(EventKind::UnauthorizedLanding),
        missions_completed,
        throughput: if elapsed > 0.0 {
            missions_completed as f64 / elapsed
        } else {
            0.0
        },
        final_states: env.last_snapshot().states.clone(),
    })
}

// ── EvalSummary ──────────────────────────────────────────────────────────────

/// Aggregated metrics over a batch of episodes.
#[derive(Clone, Debug, Default)]
pub struct EvalSummary {
    pub episodes: usize,

    pub mean_episode_length: f64,
    pub mean_total_reward: f64,
    pub std_total_reward: f64,

    pub total_collisions: usize,
    pub total_unauthorized_landings: usize,
    pub total_missions_completed: usize,

    /// Mean missions completed per episode.
    pub completion_rate: f64,
    /// Fraction of episodes that completed at least one mission.
    pub success_rate: f64,
    pub mean_throughput: f64,
}

/// Aggregate per-episode statistics into a summary.
pub fn aggregate(stats: &[EpisodeStats]) -> EvalSummary {
    if stats.is_empty() {
        return EvalSummary::default();
    }
    let n = stats.len() as f64;

    let mean = |f: &dyn Fn(&EpisodeStats) -> f64| stats.iter().map(|s| f(s)).sum::<f64>() / n;

    let mean_reward = mean(&|s| s.total_reward);
    let var_reward =
        stats.iter().map(|s| (s.total_reward - mean_reward).powi(2)).sum::<f64>() / n;

    EvalSummary {
        episodes: stats.len(),
        mean_episode_length: mean(&|s| s.episode_length as f64),
        mean_total_reward: mean_reward,
        std_total_reward: var_reward.sqrt(),
        total_collisions: stats.iter().map(|s| s.collisions).sum(),
        total_unauthorized_landings: stats.iter().map(|s| s.unauthorized_landings).sum(),
        total_missions_completed: stats.iter().map(|s| s.missions_completed).sum(),
        completion_rate: mean(&|s| s.missions_completed as f64),
        success_rate: mean(&|s| (s.missions_completed > 0) as u8 as f64),
        mean_throughput: mean(&|s| s.throughput),
    }
}

// ── evaluate ─────────────────────────────────────────────────────────────────

/// Run `episodes` independent episodes of `config` at `difficulty` and
/// aggregate their statistics.
///
/// `make_controller` receives the episode index so stochastic controllers
/// can derive a per-episode seed (see
/// [`SimRng::for_episode`][vp_core::SimRng::for_episode]); deterministic
/// controllers ignore it.
///
/// With the `parallel` feature, episodes run on Rayon's thread pool.  Each
/// episode builds its own environment, so nothing is shared between threads.
pub fn evaluate<F>(
    config: &ScenarioConfig,
    difficulty: Difficulty,
    episodes: usize,
    make_controller: F,
) -> EnvResult<EvalSummary>
where
    F: Fn(u64) -> Box<dyn Controller> + Sync,
{
    let run_one = |episode: u64| -> EnvResult<EpisodeStats> {
        let mut env = VertiportEnv::new(config, difficulty)?;
        let mut controller = make_controller(episode);
        run_episode(&mut env, controller.as_mut(), episode)
    };

    #[cfg(not(feature = "parallel"))]
    let stats: Vec<EpisodeStats> = (0..episodes as u64)
        .map(run_one)
        .collect::<EnvResult<_>>()?;

    #[cfg(feature = "parallel")]
    let stats: Vec<EpisodeStats> = {
        use rayon::prelude::*;
        (0..episodes as u64)
            .into_par_iter()
            .map(run_one)
            .collect::<EnvResult<_>>()?
    };

    Ok(aggregate(&stats))
}
