//! Error types for vp-env.

use thiserror::Error;

use vp_events::EventError;
use vp_sim::SimError;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("simulation error: {0}")]
    Sim(#[from] SimError),

    #[error("event export error: {0}")]
    Event(#[from] EventError),
}

pub type EnvResult<T> = Result<T, EnvError>;
