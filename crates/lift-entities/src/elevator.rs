//! Elevator cars.

use lift_core::{Direction, Floor};

use crate::Person;

/// A single elevator car.
///
/// Invariants upheld by the methods rather than by callers:
///
/// - `passengers.len() <= capacity` at all times;
/// - `current_floor` is a real floor (never the `NONE` sentinel) and changes
///   only through [`Elevator::apply_move`], one floor per round;
/// - `target_floor` may be the `NONE` sentinel and is recomputed by the
///   moving algorithm every round before direction selection.
#[derive(Debug)]
pub struct Elevator {
    /// Riders in boarding order: index 0 boarded earliest.
    passengers: Vec<Person>,
    capacity: usize,
    current_floor: Floor,
    target_floor: Floor,
}

impl Elevator {
    /// A new, empty car on the ground floor with no target.
    pub fn new(capacity: usize) -> Self {
        Self {
            passengers: Vec::with_capacity(capacity),
            capacity,
            current_floor: Floor::GROUND,
            target_floor: Floor::NONE,
        }
    }

    // ── State queries ─────────────────────────────────────────────────────

    #[inline]
    pub fn current_floor(&self) -> Floor {
        self.current_floor
    }

    #[inline]
    pub fn target_floor(&self) -> Floor {
        self.target_floor
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Riders in boarding order (index 0 boarded earliest).
    #[inline]
    pub fn passengers(&self) -> &[Person] {
        &self.passengers
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.passengers.len() >= self.capacity
    }

    /// Occupied fraction of capacity, between 0.0 (empty) and 1.0 (full).
    pub fn fullness(&self) -> f64 {
        self.passengers.len() as f64 / self.capacity as f64
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Take a passenger on.
    ///
    /// # Panics
    /// Panics in debug mode if the car is already full — the round loop
    /// checks capacity before boarding anyone.
    pub fn board(&mut self, person: Person) {
        debug_assert!(!self.is_full(), "boarding a full elevator");
        self.passengers.push(person);
    }

    /// Remove and return every passenger whose target is `floor`, preserving
    /// boarding order among those removed.
    pub fn disembark(&mut self, floor: Floor) -> Vec<Person> {
        let (off, staying) = std::mem::take(&mut self.passengers)
            .into_iter()
            .partition(|p| p.target == floor);
        self.passengers = staying;
        off
    }

    /// Mutable access to every rider, for wait-time accrual.
    #[inline]
    pub fn passengers_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.passengers.iter_mut()
    }

    /// Forget the current target (reset to the `NONE` sentinel).
    #[inline]
    pub fn clear_target(&mut self) {
        self.target_floor = Floor::NONE;
    }

    /// Point the car at `floor` (possibly the floor it is already on).
    #[inline]
    pub fn set_target(&mut self, floor: Floor) {
        self.target_floor = floor;
    }

    /// Apply one round's movement to `current_floor`.
    pub fn apply_move(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.current_floor = self.current_floor.above(),
            Direction::Down => self.current_floor = self.current_floor.below(),
            Direction::Stay => {}
        }
    }
}
