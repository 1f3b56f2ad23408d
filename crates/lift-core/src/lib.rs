//! `lift-core` — foundational types for the `rust_lift` elevator simulation.
//!
//! This crate is a dependency of every other `lift-*` crate.  It intentionally
//! has no `lift-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                      |
//! |---------------|-----------------------------------------------|
//! | [`floor`]     | `Floor` newtype with `NONE`/`GROUND` anchors  |
//! | [`time`]      | `Round` counter                               |
//! | [`direction`] | `Direction` enum                              |
//! | [`rng`]       | `SimRng` (seeded, deterministic)              |
//! | [`config`]    | `SimConfig` and its validation                |
//! | [`error`]     | `ConfigError`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod config;
pub mod direction;
pub mod error;
pub mod floor;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use direction::Direction;
pub use error::ConfigError;
pub use floor::Floor;
pub use rng::SimRng;
pub use time::Round;
