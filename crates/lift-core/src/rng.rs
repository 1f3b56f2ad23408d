//! Deterministic simulation RNG wrapper.
//!
//! # Determinism strategy
//!
//! The whole simulation draws from a single `SmallRng` stream seeded from
//! `SimConfig::seed`.  The stream is owned by the simulation and passed
//! `&mut` into every stochastic call (arrival generation, random movement),
//! so the draw order is fixed by the round loop and identical seeds replay
//! identical runs.  Nothing else in the system may construct its own RNG.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
///
/// Used only from the single-threaded round loop.  Components that need
/// randomness receive `&mut SimRng` as an argument rather than owning one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
