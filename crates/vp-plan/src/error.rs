//! Error types for vp-plan.

use thiserror::Error;

/// Errors raised during flight-plan generation.
///
/// All variants are configuration errors: they are raised before the first
/// tick and never recovered internally.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("cannot generate plans: layout declares no FATOs")]
    NoFatos,

    #[error("cannot generate plans: layout declares no entry gates")]
    NoEntryGates,

    #[error("cannot generate plans: layout declares no exit gates")]
    NoExitGates,

    #[error("cannot generate plans for zero drones")]
    NoDrones,
}

/// Alias for `Result<T, PlanError>`.
pub type PlanResult<T> = Result<T, PlanError>;
