//! Unit tests for the movement policies.

use lift_core::{Direction, Floor, SimRng};
use lift_entities::{Elevator, Person, WaitingRegistry};

use crate::MovingAlgorithm;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn person(start: u32, target: u32) -> Person {
    Person::new(Floor(start), Floor(target))
}

fn elevator_at(floor: u32, capacity: usize) -> Elevator {
    let mut e = Elevator::new(capacity);
    for _ in 1..floor {
        e.apply_move(Direction::Up);
    }
    e
}

fn registry_with(num_floors: u32, waiters: &[(u32, u32)]) -> WaitingRegistry {
    let mut reg = WaitingRegistry::new(num_floors);
    for &(start, target) in waiters {
        reg.arrive(Floor(start), person(start, target));
    }
    reg
}

// ── RandomAlgorithm ───────────────────────────────────────────────────────────

#[cfg(test)]
mod random_movement {
    use super::*;
    use crate::RandomAlgorithm;

    #[test]
    fn never_leaves_the_building() {
        let max_floor = Floor(4);
        let mut elevators = vec![elevator_at(1, 1), elevator_at(4, 1)];
        let waiting = WaitingRegistry::new(4);
        let mut rng = SimRng::new(3);

        for _ in 0..300 {
            let before: Vec<Floor> = elevators.iter().map(|e| e.current_floor()).collect();
            let directions =
                RandomAlgorithm.move_elevators(&mut elevators, &waiting, max_floor, &mut rng);
            assert_eq!(directions.len(), elevators.len());

            for (i, e) in elevators.iter().enumerate() {
                assert!(e.current_floor() >= Floor::GROUND);
                assert!(e.current_floor() <= max_floor);
                let expected = match directions[i] {
                    Direction::Up => before[i].above(),
                    Direction::Down => before[i].below(),
                    Direction::Stay => before[i],
                };
                assert_eq!(e.current_floor(), expected, "floor must match direction");
            }
        }
    }

    #[test]
    fn deterministic_under_a_fixed_seed() {
        let run = |seed: u64| -> Vec<Direction> {
            let mut elevators = vec![elevator_at(3, 1)];
            let waiting = WaitingRegistry::new(5);
            let mut rng = SimRng::new(seed);
            (0..50)
                .flat_map(|_| {
                    RandomAlgorithm.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng)
                })
                .collect()
        };
        assert_eq!(run(11), run(11));
        assert_ne!(run(11), run(12), "different seeds should wander differently");
    }
}

// ── PushyPassenger ────────────────────────────────────────────────────────────

#[cfg(test)]
mod pushy {
    use super::*;
    use crate::PushyPassenger;

    #[test]
    fn empty_car_seeks_the_lowest_waiting_floor() {
        let mut elevators = vec![elevator_at(1, 2)];
        let waiting = registry_with(5, &[(3, 1), (5, 1)]);
        let mut rng = SimRng::new(0);

        let directions =
            PushyPassenger.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng);

        assert_eq!(directions, vec![Direction::Up]);
        assert_eq!(elevators[0].target_floor(), Floor(3));
        assert_eq!(elevators[0].current_floor(), Floor(2));
    }

    #[test]
    fn follows_the_first_boarded_passenger() {
        let mut e = elevator_at(3, 2);
        e.board(person(1, 5));
        e.board(person(1, 2));
        let mut elevators = vec![e];
        let waiting = WaitingRegistry::new(5);
        let mut rng = SimRng::new(0);

        let directions =
            PushyPassenger.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng);

        assert_eq!(directions, vec![Direction::Up]);
        assert_eq!(elevators[0].target_floor(), Floor(5));
    }

    #[test]
    fn passengers_outrank_waiting_floors() {
        let mut e = elevator_at(3, 1);
        e.board(person(5, 2));
        let mut elevators = vec![e];
        // Someone waits below the passenger's target; the passenger wins.
        let waiting = registry_with(5, &[(1, 4)]);
        let mut rng = SimRng::new(0);

        let directions =
            PushyPassenger.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng);

        assert_eq!(directions, vec![Direction::Down]);
        assert_eq!(elevators[0].target_floor(), Floor(2));
    }

    #[test]
    fn idle_building_holds_still_with_no_target() {
        let mut elevators = vec![elevator_at(2, 1)];
        let waiting = WaitingRegistry::new(5);
        let mut rng = SimRng::new(0);

        let directions =
            PushyPassenger.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng);

        assert_eq!(directions, vec![Direction::Stay]);
        assert!(elevators[0].target_floor().is_none());
        assert_eq!(elevators[0].current_floor(), Floor(2));
    }
}

// ── ShortSighted ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod short_sighted {
    use super::*;
    use crate::ShortSighted;

    #[test]
    fn empty_car_breaks_waiting_ties_downward() {
        let mut elevators = vec![elevator_at(4, 1)];
        // F2 and F6 are both two floors away from F4.
        let waiting = registry_with(7, &[(2, 1), (6, 1)]);
        let mut rng = SimRng::new(0);

        let directions =
            ShortSighted.move_elevators(&mut elevators, &waiting, Floor(7), &mut rng);

        assert_eq!(directions, vec![Direction::Down]);
        assert_eq!(elevators[0].target_floor(), Floor(2));
    }

    #[test]
    fn empty_car_chases_the_strictly_nearest_waiter() {
        let mut elevators = vec![elevator_at(2, 1)];
        let waiting = registry_with(7, &[(3, 1), (7, 1)]);
        let mut rng = SimRng::new(0);

        let directions =
            ShortSighted.move_elevators(&mut elevators, &waiting, Floor(7), &mut rng);

        assert_eq!(directions, vec![Direction::Up]);
        assert_eq!(elevators[0].target_floor(), Floor(3));
    }

    #[test]
    fn carries_to_the_nearest_passenger_target() {
        let mut e = elevator_at(4, 2);
        e.board(person(1, 6));
        e.board(person(1, 3));
        let mut elevators = vec![e];
        let waiting = WaitingRegistry::new(6);
        let mut rng = SimRng::new(0);

        let directions =
            ShortSighted.move_elevators(&mut elevators, &waiting, Floor(6), &mut rng);

        assert_eq!(directions, vec![Direction::Down]);
        assert_eq!(elevators[0].target_floor(), Floor(3));
    }

    #[test]
    fn passenger_ties_break_downward_regardless_of_boarding_order() {
        for order in [[2u32, 6], [6, 2]] {
            let mut e = elevator_at(4, 2);
            for target in order {
                e.board(person(1, target));
            }
            let mut elevators = vec![e];
            let waiting = WaitingRegistry::new(7);
            let mut rng = SimRng::new(0);

            let directions =
                ShortSighted.move_elevators(&mut elevators, &waiting, Floor(7), &mut rng);

            assert_eq!(directions, vec![Direction::Down]);
            assert_eq!(elevators[0].target_floor(), Floor(2));
        }
    }

    #[test]
    fn idle_building_parks_on_the_spot() {
        let mut elevators = vec![elevator_at(3, 1)];
        let waiting = WaitingRegistry::new(5);
        let mut rng = SimRng::new(0);

        let directions =
            ShortSighted.move_elevators(&mut elevators, &waiting, Floor(5), &mut rng);

        assert_eq!(directions, vec![Direction::Stay]);
        assert_eq!(elevators[0].target_floor(), Floor(3), "parks targeting its own floor");
        assert_eq!(elevators[0].current_floor(), Floor(3));
    }

    #[test]
    fn walks_one_floor_per_round_until_arrival() {
        let mut e = elevator_at(1, 1);
        e.board(person(1, 5));
        let mut elevators = vec![e];
        let waiting = WaitingRegistry::new(5);
        let mut rng = SimRng::new(0);

        let mut walked = Vec::new();
        for _ in 0..5 {
            walked.extend(ShortSighted.move_elevators(
                &mut elevators,
                &waiting,
                Floor(5),
                &mut rng,
            ));
        }
        assert_eq!(
            walked,
            vec![
                Direction::Up,
                Direction::Up,
                Direction::Up,
                Direction::Up,
                Direction::Stay
            ]
        );
        assert_eq!(elevators[0].current_floor(), Floor(5));
    }
}
