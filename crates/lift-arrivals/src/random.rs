//! Uniform random arrivals.

use std::collections::HashMap;

use lift_core::{Floor, Round, SimRng};
use lift_entities::Person;

use crate::ArrivalGenerator;

/// Generate a fixed number of uniformly random people each round.
///
/// Start floors are uniform over `1..=max_floor`; target floors are drawn
/// the same way and redrawn until they differ from the start.  `num_people`
/// of `None` generates nobody, which makes an idle-building baseline run
/// trivial to configure.
pub struct RandomArrivals {
    max_floor: Floor,
    num_people: Option<u32>,
}

impl RandomArrivals {
    /// `max_floor` must be a real floor of at least 2 — with a single floor
    /// there is no valid (start, target) pair to draw.
    pub fn new(max_floor: Floor, num_people: Option<u32>) -> Self {
        debug_assert!(max_floor.0 >= 2, "cannot generate trips in a {max_floor} building");
        Self { max_floor, num_people }
    }
}

impl ArrivalGenerator for RandomArrivals {
    fn generate(&mut self, _round: Round, rng: &mut SimRng) -> HashMap<Floor, Vec<Person>> {
        let mut arrivals: HashMap<Floor, Vec<Person>> = HashMap::new();
        for _ in 0..self.num_people.unwrap_or(0) {
            let start = Floor(rng.gen_range(1..=self.max_floor.0));
            let mut target = Floor(rng.gen_range(1..=self.max_floor.0));
            while target == start {
                target = Floor(rng.gen_range(1..=self.max_floor.0));
            }
            arrivals
                .entry(start)
                .or_default()
                .push(Person::new(start, target));
        }
        arrivals
    }
}
