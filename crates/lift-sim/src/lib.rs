//! `lift-sim` — round loop orchestrator for the rust_lift simulation.
//!
//! | Module                  | Contents                                       |
//! |-------------------------|------------------------------------------------|
//! | [`sim`]                 | [`Sim`], the simulation state and round loop   |
//! | [`stats`]               | [`RunStats`], end-of-run aggregate figures     |
//! | [`visualizer`]          | [`Visualizer`] hooks, [`NoopVisualizer`]       |
//! | [`error`]               | [`SimError`], [`SimResult`]                    |
//!
//! # The round loop
//!
//! ```text
//! for round in 0..num_rounds:
//!   ① Arrivals   — the generator introduces new people; each is queued on
//!                  their start floor, newest in front.
//!   ② Alighting  — passengers at their target floor step off, are marked
//!                  complete, and join the completed collection.
//!   ③ Boarding   — cars fill from their floor's queue, newest waiter
//!                  first, until full or the floor empties.
//!   ④ Accrual    — everyone still waiting or riding waits one more round.
//!   ⑤ Movement   — the moving algorithm repositions every car by at most
//!                  one floor.
//! ```
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lift_arrivals::RandomArrivals;
//! use lift_core::SimConfig;
//! use lift_moving::ShortSighted;
//! use lift_sim::{NoopVisualizer, Sim};
//!
//! let config = SimConfig {
//!     num_floors: 6,
//!     num_elevators: 2,
//!     elevator_capacity: 4,
//!     seed: 42,
//!     visualize: false,
//! };
//! let arrivals = RandomArrivals::new(config.top_floor(), Some(2));
//! let mut sim = Sim::new(config, arrivals, ShortSighted)?;
//! let stats = sim.run(100, &mut NoopVisualizer)?;
//! println!("{} of {} journeys completed", stats.people_completed, stats.total_people);
//! ```
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                        |
//! |---------|---------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on [`RunStats`] (and, transitively, |
//! |         | on the core config types).                                    |

pub mod error;
pub mod sim;
pub mod stats;
pub mod visualizer;


pub use error::{SimError, SimResult};
pub use sim::Sim;
pub use stats::RunStats;
pub use visualizer::{NoopVisualizer, Visualizer};
