//! Configuration error type.
//!
//! Sub-crates define their own error enums (`ArrivalError`, `SimError`,
//! `OutputError`) and wrap `ConfigError` as a variant where construction
//! can fail on bad parameters.

use thiserror::Error;

/// Rejected [`crate::SimConfig`] values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a building needs at least 2 floors, got {got}")]
    NotEnoughFloors { got: u32 },

    #[error("a simulation needs at least 1 elevator")]
    NoElevators,

    #[error("elevator capacity must be at least 1")]
    ZeroCapacity,
}
