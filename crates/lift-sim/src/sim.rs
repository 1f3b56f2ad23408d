//! The simulation state and its round loop.

use std::time::Duration;

use lift_arrivals::ArrivalGenerator;
use lift_core::{Round, SimConfig, SimRng};
use lift_entities::{Elevator, Person, WaitingRegistry};
use lift_moving::MovingAlgorithm;

use crate::error::{SimError, SimResult};
use crate::stats::RunStats;
use crate::visualizer::Visualizer;

/// How long the pacing hook is asked to pause between rounds.
const ROUND_PAUSE: Duration = Duration::from_secs(1);

/// The simulation runner.
///
/// Owns every piece of live state (cars, per-floor queues, completed
/// journeys, the RNG stream) plus the two pluggable strategies: an
/// [`ArrivalGenerator`] that introduces people and a [`MovingAlgorithm`]
/// that repositions cars.  Construct with [`Sim::new`], then drive the
/// round loop with [`Sim::run`].
pub struct Sim<G: ArrivalGenerator, M: MovingAlgorithm> {
    /// Building and run parameters.
    pub config: SimConfig,

    /// The single deterministic RNG stream, seeded from `config.seed`.
    pub rng: SimRng,

    /// Where new people come from.
    pub arrivals: G,

    /// How cars decide to move.
    pub moving: M,

    /// The cars.  Their number is fixed for the life of the simulation.
    pub elevators: Vec<Elevator>,

    /// Per-floor queues of people not yet aboard.
    pub waiting: WaitingRegistry,

    /// Everyone who has reached their target, in completion order.
    pub completed: Vec<Person>,

    /// Rounds executed so far, across all calls to [`Sim::run`].
    pub num_rounds: u32,
}

impl<G: ArrivalGenerator, M: MovingAlgorithm> Sim<G, M> {
    /// Validate `config` and assemble a fresh simulation: empty floor
    /// queues, every car on the ground floor, nobody completed.
    pub fn new(config: SimConfig, arrivals: G, moving: M) -> SimResult<Self> {
        config.validate()?;

        let elevators = (0..config.num_elevators)
            .map(|_| Elevator::new(config.elevator_capacity))
            .collect();
        let waiting = WaitingRegistry::new(config.num_floors);
        let rng = SimRng::new(config.seed);

        tracing::info!(
            floors = config.num_floors,
            elevators = config.num_elevators,
            capacity = config.elevator_capacity,
            seed = config.seed,
            "simulation assembled"
        );

        Ok(Self {
            config,
            rng,
            arrivals,
            moving,
            elevators,
            waiting,
            completed: Vec::new(),
            num_rounds: 0,
        })
    }

    /// Run the round loop `num_rounds` times (at least once) and report the
    /// run's [`RunStats`].
    ///
    /// The visualizer is called at every stage boundary; pass
    /// [`NoopVisualizer`][crate::NoopVisualizer] when rendering is not
    /// wanted.
    pub fn run<V: Visualizer>(&mut self, num_rounds: u32, visualizer: &mut V) -> SimResult<RunStats> {
        if num_rounds == 0 {
            return Err(SimError::ZeroRounds);
        }

        for i in 0..num_rounds {
            let round = Round(i);
            self.num_rounds += 1;
            visualizer.render_header(round);
            self.process_round(round, visualizer);
            visualizer.wait(ROUND_PAUSE);
        }

        Ok(self.statistics())
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn process_round<V: Visualizer>(&mut self, round: Round, visualizer: &mut V) {
        // ── Stage 1: arrivals ─────────────────────────────────────────────
        //
        // Each new person is prepended to their floor's queue, so within a
        // queue the newest arrival stands in front.
        let new_people = self.arrivals.generate(round, &mut self.rng);
        let mut anyone_arrived = false;
        for (floor, people) in new_people {
            for person in people {
                self.waiting.arrive(floor, person);
                anyone_arrived = true;
            }
        }
        if anyone_arrived {
            visualizer.show_arrivals(&self.waiting);
        }

        // ── Stage 2: alighting ────────────────────────────────────────────
        for elevator in &mut self.elevators {
            let here = elevator.current_floor();
            for mut person in elevator.disembark(here) {
                person.mark_complete();
                visualizer.show_disembarking(&person, elevator);
                self.completed.push(person);
            }
        }

        // ── Stage 3: boarding ─────────────────────────────────────────────
        //
        // Newest waiter first, until the car fills or the floor empties.
        for elevator in &mut self.elevators {
            while !elevator.is_full() {
                match self.waiting.board_next(elevator.current_floor()) {
                    Some(person) => {
                        visualizer.show_boarding(&person, elevator);
                        elevator.board(person);
                    }
                    None => break,
                }
            }
        }

        // ── Stage 4: wait accrual ─────────────────────────────────────────
        //
        // Riders first, then everyone still queued on a floor.  People who
        // completed this round are frozen and no longer accrue.
        for elevator in &mut self.elevators {
            for person in elevator.passengers_mut() {
                person.increase_wait_time();
            }
        }
        for person in self.waiting.people_mut() {
            person.increase_wait_time();
        }

        // ── Stage 5: movement ─────────────────────────────────────────────
        let directions = self.moving.move_elevators(
            &mut self.elevators,
            &self.waiting,
            self.config.top_floor(),
            &mut self.rng,
        );
        visualizer.show_elevator_moves(&self.elevators, &directions);

        tracing::debug!(
            %round,
            waiting = self.waiting.len(),
            riding = riders(&self.elevators),
            completed = self.completed.len(),
            "round complete"
        );
    }

    // ── Statistics ────────────────────────────────────────────────────────

    fn statistics(&self) -> RunStats {
        let total_people = self.waiting.len() + riders(&self.elevators) + self.completed.len();

        let mut min_time = None;
        let mut max_time = None;
        let mut sum_time: u64 = 0;
        for person in &self.completed {
            let t = person.wait_time();
            min_time = Some(min_time.map_or(t, |m: u32| m.min(t)));
            max_time = Some(max_time.map_or(t, |m: u32| m.max(t)));
            sum_time += u64::from(t);
        }
        let avg_time = if self.completed.is_empty() {
            None
        } else {
            Some(sum_time as f64 / self.completed.len() as f64)
        };

        RunStats {
            num_iterations: self.num_rounds,
            total_people,
            people_completed: self.completed.len(),
            max_time,
            min_time,
            avg_time,
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────

/// Total number of people currently riding a car.
fn riders(elevators: &[Elevator]) -> usize {
    elevators.iter().map(|e| e.passengers().len()).sum()
}
