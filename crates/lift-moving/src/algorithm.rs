//! The `MovingAlgorithm` trait — how elevators decide where to go.

use lift_core::{Direction, Floor, SimRng};
use lift_entities::{Elevator, WaitingRegistry};

/// Pluggable elevator movement policy.
///
/// Called once per round as the final simulation stage.  Implementations
/// pick a direction for every elevator and apply it to the elevator's floor
/// before returning, so the caller observes post-move positions together
/// with the direction each car took.
///
/// # Contract
///
/// - One direction per elevator, in elevator order.
/// - Directions are physically valid: never `Down` from the ground floor,
///   never `Up` from `max_floor`.
/// - Each elevator's floor changes exactly as its direction says: `Up` one
///   floor up, `Down` one floor down, `Stay` unchanged.
pub trait MovingAlgorithm {
    /// Choose and apply one round of movement.
    ///
    /// `waiting` is read-only: movement never boards or strands anyone, it
    /// only repositions the cars.  `rng` is the simulation stream, used by
    /// stochastic policies and ignored by deterministic ones.
    fn move_elevators(
        &self,
        elevators: &mut [Elevator],
        waiting: &WaitingRegistry,
        max_floor: Floor,
        rng: &mut SimRng,
    ) -> Vec<Direction>;
}

/// Step every elevator one floor toward its target and report directions.
///
/// Shared by the target-seeking policies.  A car whose target is the `NONE`
/// sentinel, or that is already on its target floor, holds still.
pub(crate) fn step_toward_targets(elevators: &mut [Elevator]) -> Vec<Direction> {
    elevators
        .iter_mut()
        .map(|e| {
            let target = e.target_floor();
            let direction = if target.is_none() || target == e.current_floor() {
                Direction::Stay
            } else if e.current_floor() < target {
                Direction::Up
            } else {
                Direction::Down
            };
            e.apply_move(direction);
            direction
        })
        .collect()
}
