//! `lift-moving` — algorithms that decide where the elevators go.
//!
//! # Crate layout
//!
//! | Module           | Contents                                         |
//! |------------------|--------------------------------------------------|
//! | [`algorithm`]    | The `MovingAlgorithm` trait and shared stepper   |
//! | [`random`]       | `RandomAlgorithm` (uniform over valid moves)     |
//! | [`pushy`]        | `PushyPassenger` (first-boarded passenger rules) |
//! | [`short_sighted`]| `ShortSighted` (nearest target, no look-ahead)   |
//!
//! All three implementations honor the same physical contract: no move past
//! the ground or top floor, one floor per round, and every elevator's
//! position updated to match the direction reported for it.

pub mod algorithm;
pub mod pushy;
pub mod random;
pub mod short_sighted;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use algorithm::MovingAlgorithm;
pub use pushy::PushyPassenger;
pub use random::RandomAlgorithm;
pub use short_sighted::ShortSighted;
