//! `lift-output` — visualizers that render or record a simulation run.
//!
//! Two implementations of `lift_sim::Visualizer` are provided:
//!
//! | Type                  | Output                                          |
//! |-----------------------|-------------------------------------------------|
//! | [`ConsoleVisualizer`] | A per-round text rendering of the building      |
//! | [`RoundTraceWriter`]  | One CSV summary row per round                   |
//!
//! Visualizer hooks have no return value, so both types store the first
//! write error internally.  After `sim.run()` returns, check for one with
//! `take_error`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lift_output::ConsoleVisualizer;
//!
//! let mut console = ConsoleVisualizer::stdout(&config);
//! let stats = sim.run(10, &mut console)?;
//! if let Some(e) = console.take_error() {
//!     eprintln!("rendering error: {e}");
//! }
//! ```

pub mod console;
pub mod error;
pub mod trace;

#[cfg(test)]
mod tests;

pub use console::ConsoleVisualizer;
pub use error::{OutputError, OutputResult};
pub use trace::RoundTraceWriter;
