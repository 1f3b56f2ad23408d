//! First-passenger-first movement.

use lift_core::{Direction, Floor, SimRng};
use lift_entities::{Elevator, WaitingRegistry};

use crate::algorithm::step_toward_targets;
use crate::MovingAlgorithm;

/// Defer entirely to whoever boarded first.
///
/// A car with passengers heads for the target of its first-boarded
/// passenger, ignoring everyone else aboard.  An empty car heads for the
/// lowest floor with somebody waiting, or keeps no target and holds still
/// when the whole building is idle.
pub struct PushyPassenger;

impl MovingAlgorithm for PushyPassenger {
    fn move_elevators(
        &self,
        elevators: &mut [Elevator],
        waiting: &WaitingRegistry,
        _max_floor: Floor,
        _rng: &mut SimRng,
    ) -> Vec<Direction> {
        for e in elevators.iter_mut() {
            let first_target = e.passengers().first().map(|p| p.target);
            e.clear_target();
            if let Some(target) = first_target {
                e.set_target(target);
            } else if let Some(floor) = waiting.lowest_waiting_floor() {
                e.set_target(floor);
            }
        }
        step_toward_targets(elevators)
    }
}
