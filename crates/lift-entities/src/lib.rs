//! `lift-entities` — the two "physical" entities of the simulation (people and
//! elevator cars) plus the per-floor waiting registry that holds people until
//! they board.
//!
//! # What lives here
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | [`person`]   | `Person` with wait-time and anger tracking          |
//! | [`elevator`] | `Elevator` car with capacity and movement           |
//! | [`waiting`]  | `WaitingRegistry`, one queue per floor              |
//!
//! Ownership rule: a `Person` is owned by exactly one container at a time —
//! a floor queue, an elevator, or the simulation's completed collection —
//! and moves between them by value.  `Person` is deliberately not `Clone`,
//! so accidentally duplicating someone is a compile error.

pub mod elevator;
pub mod person;
pub mod waiting;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use elevator::Elevator;
pub use person::Person;
pub use waiting::WaitingRegistry;
