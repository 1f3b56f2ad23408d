//! Uniformly random movement.

use lift_core::{Direction, Floor, SimRng};
use lift_entities::{Elevator, WaitingRegistry};

use crate::MovingAlgorithm;

/// Move every elevator in a uniformly random valid direction each round.
///
/// Ignores passengers and waiting people entirely.  Useful as a baseline
/// to compare the smarter policies against, and as a stress source for the
/// physical-bounds contract.
pub struct RandomAlgorithm;

impl MovingAlgorithm for RandomAlgorithm {
    fn move_elevators(
        &self,
        elevators: &mut [Elevator],
        _waiting: &WaitingRegistry,
        max_floor: Floor,
        rng: &mut SimRng,
    ) -> Vec<Direction> {
        elevators
            .iter_mut()
            .map(|e| {
                let options: &[Direction] = if e.current_floor() == Floor::GROUND {
                    &[Direction::Up, Direction::Stay]
                } else if e.current_floor() == max_floor {
                    &[Direction::Down, Direction::Stay]
                } else {
                    &[Direction::Up, Direction::Stay, Direction::Down]
                };
                let direction = rng.choose(options).copied().unwrap_or_default();
                e.apply_move(direction);
                direction
            })
            .collect()
    }
}
