//! `WaitingRegistry` — per-floor queues of people waiting for an elevator.
//!
//! # Ordering
//!
//! Each arrival is prepended to its floor's queue, and boarding pops from
//! the same end, so the person who arrived most recently boards first.
//! That stack-like order is deliberate, pinned behavior — not FIFO — and
//! the registry owns the rule in one place: the round loop and the moving
//! algorithms only ever call [`WaitingRegistry::arrive`] and
//! [`WaitingRegistry::board_next`].

use std::collections::{BTreeMap, VecDeque};

use lift_core::Floor;

use crate::Person;

/// Queues of waiting people, one per floor of the building.
///
/// Every floor `1..=num_floors` has an entry from construction onward, so
/// lookups never have to distinguish "empty floor" from "unknown floor".
pub struct WaitingRegistry {
    floors: BTreeMap<Floor, VecDeque<Person>>,
    /// Cached total people count for O(1) `len()`.
    total: usize,
}

impl WaitingRegistry {
    pub fn new(num_floors: u32) -> Self {
        let floors = (1..=num_floors)
            .map(|f| (Floor(f), VecDeque::new()))
            .collect();
        Self { floors, total: 0 }
    }

    /// Queue `person` on `floor`.  The most recent arrival stands at the
    /// front of the queue.
    pub fn arrive(&mut self, floor: Floor, person: Person) {
        debug_assert!(
            self.floors.contains_key(&floor),
            "floor {floor} is outside the building"
        );
        self.floors.entry(floor).or_default().push_front(person);
        self.total += 1;
    }

    /// Remove and return the most recently arrived person on `floor`, or
    /// `None` if nobody waits there.
    pub fn board_next(&mut self, floor: Floor) -> Option<Person> {
        let person = self.floors.get_mut(&floor)?.pop_front()?;
        self.total -= 1;
        Some(person)
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` if at least one person waits on `floor`.
    pub fn has_waiting(&self, floor: Floor) -> bool {
        self.floors.get(&floor).is_some_and(|q| !q.is_empty())
    }

    /// Number of people waiting on `floor`.
    pub fn count_on(&self, floor: Floor) -> usize {
        self.floors.get(&floor).map_or(0, VecDeque::len)
    }

    /// Total number of people waiting anywhere in the building.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// The highest floor of the building.
    pub fn top_floor(&self) -> Floor {
        self.floors
            .keys()
            .next_back()
            .copied()
            .unwrap_or(Floor::GROUND)
    }

    /// The lowest floor with at least one waiting person.
    pub fn lowest_waiting_floor(&self) -> Option<Floor> {
        self.floors
            .iter()
            .find(|(_, q)| !q.is_empty())
            .map(|(f, _)| *f)
    }

    /// The floor with waiting people nearest to `from`, scanning outward by
    /// increasing distance and checking below before above, so of two
    /// equidistant candidates the lower one wins.  `from` itself is never
    /// considered.
    pub fn nearest_waiting_floor(&self, from: Floor) -> Option<Floor> {
        let top = self.top_floor();
        for offset in 1..top.0 {
            if from.0 > offset && self.has_waiting(Floor(from.0 - offset)) {
                return Some(Floor(from.0 - offset));
            }
            let above = Floor(from.0 + offset);
            if above <= top && self.has_waiting(above) {
                return Some(above);
            }
        }
        None
    }

    // ── Iteration ─────────────────────────────────────────────────────────

    /// Floors in ascending order with their queues (front = newest arrival).
    pub fn iter(&self) -> impl Iterator<Item = (Floor, &VecDeque<Person>)> {
        self.floors.iter().map(|(f, q)| (*f, q))
    }

    /// Mutable access to every waiting person, for wait-time accrual.
    pub fn people_mut(&mut self) -> impl Iterator<Item = &mut Person> {
        self.floors.values_mut().flat_map(|q| q.iter_mut())
    }
}
