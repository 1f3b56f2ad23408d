//! Simulation time model.
//!
//! Time advances in whole rounds.  Every round runs the five simulation
//! stages (arrivals, alighting, boarding, wait accrual, movement) to
//! completion before the next begins, so `Round` is the only time unit in
//! the system.  Rounds handed to arrival generators are 0-based loop
//! indices: a schedule entry for round 3 fires on the fourth round of a run.

use std::fmt;

/// A discrete simulation round counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u32);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u32) -> Round {
        Round(self.0 + n)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
