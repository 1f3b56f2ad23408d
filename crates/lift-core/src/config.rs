//! Top-level simulation configuration.

use crate::error::ConfigError;
use crate::floor::Floor;

/// Parameters for one simulation run.
///
/// Typically built in the application crate and handed to the simulation
/// constructor, which calls [`SimConfig::validate`] and refuses to run with
/// out-of-range values.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Number of floors in the building.  Must be at least 2.
    pub num_floors: u32,

    /// Number of elevators.  Must be at least 1.  Every elevator starts a
    /// run empty on the ground floor.
    pub num_elevators: usize,

    /// Passenger capacity of each elevator.  Must be at least 1.
    pub elevator_capacity: usize,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Hint for applications: attach a rendering visualizer to the run.
    /// The simulation itself never reads this.
    pub visualize: bool,
}

impl SimConfig {
    /// The highest floor in the building.
    #[inline]
    pub fn top_floor(&self) -> Floor {
        Floor(self.num_floors)
    }

    /// Check every field against its documented bound.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_floors < 2 {
            return Err(ConfigError::NotEnoughFloors { got: self.num_floors });
        }
        if self.num_elevators == 0 {
            return Err(ConfigError::NoElevators);
        }
        if self.elevator_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
