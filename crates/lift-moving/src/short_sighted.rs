//! Nearest-target movement.

use lift_core::{Direction, Floor, SimRng};
use lift_entities::{Elevator, WaitingRegistry};

use crate::algorithm::step_toward_targets;
use crate::MovingAlgorithm;

/// Chase whatever is closest, with no look-ahead.
///
/// A car with passengers heads for the passenger target nearest its current
/// floor; boarding order is irrelevant, and of two equidistant targets the
/// lower one wins.  An empty car heads for the nearest floor with somebody
/// waiting (same downward tie-break), or targets its own floor and holds
/// still when the whole building is idle.
pub struct ShortSighted;

impl MovingAlgorithm for ShortSighted {
    fn move_elevators(
        &self,
        elevators: &mut [Elevator],
        waiting: &WaitingRegistry,
        _max_floor: Floor,
        _rng: &mut SimRng,
    ) -> Vec<Direction> {
        for e in elevators.iter_mut() {
            let target = if e.is_empty() {
                waiting
                    .nearest_waiting_floor(e.current_floor())
                    .unwrap_or(e.current_floor())
            } else {
                closest_passenger_target(e)
            };
            e.set_target(target);
        }
        step_toward_targets(elevators)
    }
}

/// The passenger target floor with minimum absolute distance from the car.
///
/// A candidate below the car displaces the incumbent at equal distance; a
/// candidate above only displaces at strictly smaller distance.  The lower
/// of two equidistant targets therefore always wins.
fn closest_passenger_target(elevator: &Elevator) -> Floor {
    let from = elevator.current_floor();
    let mut best: Option<(Floor, u32)> = None;
    for p in elevator.passengers() {
        let dist = p.target.distance(from);
        let wins = match best {
            None => true,
            Some((_, best_dist)) => {
                if p.target < from {
                    dist <= best_dist
                } else {
                    dist < best_dist
                }
            }
        };
        if wins {
            best = Some((p.target, dist));
        }
    }
    best.map_or(from, |(floor, _)| floor)
}
