//! `vp-env` — the controller-facing episode layer.
//!
//! Wraps a [`vp_sim::VertiportSim`] into an episodic environment:
//!
//! ```text
//! obs = env.reset()
//! loop {
//!   actions = controller.act(&obs)
//!   (obs, reward, terminated, truncated) = env.step(&actions)
//!   if terminated || truncated { break }
//! }
//! ```
//!
//! | Module         | Contents                                              |
//! |----------------|-------------------------------------------------------|
//! | [`reward`]     | `Difficulty`, `RewardWeights`, the reward projection  |
//! | [`obs`]        | `Observation` — the per-tick controller view          |
//! | [`env`]        | `VertiportEnv`, `StepOutcome`                         |
//! | [`controller`] | `Controller` trait + baseline implementations         |
//! | [`eval`]       | per-episode statistics and multi-episode aggregation  |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs evaluation episodes on Rayon's thread pool.         |

pub mod controller;
pub mod env;
pub mod error;
pub mod eval;
pub mod obs;
pub mod reward;


pub use controller::{Controller, FcfsController, GreedyController, RandomController};
pub use env::{StepOutcome, VertiportEnv};
pub use error::{EnvError, EnvResult};
pub use eval::{aggregate, evaluate, run_episode, EpisodeStats, EvalSummary};
pub use obs::{Observation, DRONE_FEATURES};
pub use reward::{Difficulty, RewardWeights, MISSION_REWARD};
