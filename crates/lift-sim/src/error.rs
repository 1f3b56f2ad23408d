//! Error type for simulation assembly and runs.

use lift_core::ConfigError;
use thiserror::Error;

/// Anything that can go wrong while assembling or running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// The configuration failed validation.
    #[error("invalid simulation configuration: {0}")]
    Config(#[from] ConfigError),

    /// A run must last at least one round.
    #[error("a run must last at least one round")]
    ZeroRounds,
}

/// Convenience alias used throughout this crate.
pub type SimResult<T> = Result<T, SimError>;
