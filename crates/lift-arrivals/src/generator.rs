//! The `ArrivalGenerator` trait — where new people come from.

use std::collections::HashMap;

use lift_core::{Floor, Round, SimRng};
use lift_entities::Person;

/// Pluggable arrival generation.
///
/// Called once per round, before anything else happens in that round.  The
/// returned map buckets the new people by their start floor; floors with no
/// arrivals may simply be absent.  Receives `&mut self` because a generator
/// may consume internal state (a file-driven schedule replays each round at
/// most once), and the simulation's [`SimRng`] so stochastic generators stay
/// deterministic under a fixed seed.
///
/// # Contract
///
/// - Every produced person has `start != target`.
/// - Every referenced floor lies in `1..=max_floor` for the building the
///   generator was configured with.
pub trait ArrivalGenerator {
    /// New arrivals for `round`, bucketed by start floor.
    fn generate(&mut self, round: Round, rng: &mut SimRng) -> HashMap<Floor, Vec<Person>>;
}
