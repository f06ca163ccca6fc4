use thiserror::Error;

use vp_layout::LayoutError;
use vp_plan::PlanError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("scenario configuration error: {0}")]
    Layout(#[from] LayoutError),

    #[error("flight plan generation error: {0}")]
    Plan(#[from] PlanError),

    #[error("action count {got} does not match drone count {expected}")]
    ActionCountMismatch { expected: usize, got: usize },

    /// FATO double-occupancy or occupancy flags inconsistent with drone
    /// states.  Unreachable while the pipeline order is respected; surfaced
    /// as fatal when observed.
    #[error("invariant violation: {0}")]
    Invariant(String),
}

pub type SimResult<T> = Result<T, SimError>;
