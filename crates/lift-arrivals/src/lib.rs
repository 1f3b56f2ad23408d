//! `lift-arrivals` — algorithms that decide who shows up where, each round.
//!
//! # Crate layout
//!
//! | Module        | Contents                                         |
//! |---------------|--------------------------------------------------|
//! | [`generator`] | The `ArrivalGenerator` trait                     |
//! | [`random`]    | `RandomArrivals` (uniform, fixed count per round)|
//! | [`file`]      | `FileArrivals` (CSV schedule, consumed on use)   |
//! | [`error`]     | `ArrivalError`, `ArrivalResult<T>`               |
//!
//! Generators produce people bucketed by start floor; the simulation merges
//! them into its waiting registry.  Both implementations uphold the same
//! contract: no person ever starts and ends on the same floor, and no floor
//! outside `1..=max_floor` is referenced.

pub mod error;
pub mod file;
pub mod generator;
pub mod random;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ArrivalError, ArrivalResult};
pub use file::FileArrivals;
pub use generator::ArrivalGenerator;
pub use random::RandomArrivals;
