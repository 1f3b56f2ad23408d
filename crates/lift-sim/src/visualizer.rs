//! Rendering and pacing hooks for the round loop.

use std::time::Duration;

use lift_core::{Direction, Round};
use lift_entities::{Elevator, Person, WaitingRegistry};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at fixed points in
/// each round.
///
/// Every method has a default no-op implementation, so a visualizer only
/// implements the hooks it cares about.  Hooks receive shared references
/// only: a visualizer observes a run but can never change its course.
///
/// # Example — counting boardings
///
/// ```rust,ignore
/// struct BoardingCounter(usize);
///
/// impl Visualizer for BoardingCounter {
///     fn show_boarding(&mut self, _person: &Person, _elevator: &Elevator) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait Visualizer {
    /// Called at the start of each round, before any stage runs.
    fn render_header(&mut self, _round: Round) {}

    /// Called after new arrivals were queued on their floors.  Skipped
    /// entirely on rounds where nobody arrived.
    fn show_arrivals(&mut self, _waiting: &WaitingRegistry) {}

    /// Called for each person about to board `elevator`, before they are
    /// added to the car.
    fn show_boarding(&mut self, _person: &Person, _elevator: &Elevator) {}

    /// Called for each person who just stepped off `elevator` at their
    /// target floor.  The person is already marked complete.
    fn show_disembarking(&mut self, _person: &Person, _elevator: &Elevator) {}

    /// Called after movement, with the post-move cars and the direction
    /// each one took (in car order).
    fn show_elevator_moves(&mut self, _elevators: &[Elevator], _directions: &[Direction]) {}

    /// Pacing hook, called once at the end of each round.  Real-time
    /// renderers sleep here; everything else ignores it.
    fn wait(&mut self, _pause: Duration) {}
}

/// A [`Visualizer`] that does nothing.  Pass this to
/// [`Sim::run`][crate::Sim::run] when rendering is not wanted.
pub struct NoopVisualizer;

impl Visualizer for NoopVisualizer {}
