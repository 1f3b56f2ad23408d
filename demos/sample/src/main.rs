//! sample — the smallest runnable rust_lift scenario.
//!
//! Five floors, two single-person cars, a fixed arrival schedule read from
//! `data/sample_arrivals.csv`, and the short-sighted moving algorithm.  With
//! `visualize` on, every round renders to the terminal at one-second pace,
//! then the run's statistics print as JSON.

use std::path::Path;

use anyhow::Result;

use lift_arrivals::FileArrivals;
use lift_core::SimConfig;
use lift_moving::ShortSighted;
use lift_output::ConsoleVisualizer;
use lift_sim::{NoopVisualizer, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:        u32   = 5;
const NUM_ELEVATORS:     usize = 2;
const ELEVATOR_CAPACITY: usize = 1;
const SEED:              u64   = 42;
const NUM_ROUNDS:        u32   = 10;

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lift_sim=info".parse()?)
                .add_directive("lift_arrivals=info".parse()?),
        )
        .init();

    println!("=== sample — rust_lift elevator simulation ===");
    println!("Floors: {NUM_FLOORS}  |  Elevators: {NUM_ELEVATORS} × cap {ELEVATOR_CAPACITY}  |  Rounds: {NUM_ROUNDS}");
    println!();

    // 1. Sim config.
    let config = SimConfig {
        num_floors:        NUM_FLOORS,
        num_elevators:     NUM_ELEVATORS,
        elevator_capacity: ELEVATOR_CAPACITY,
        seed:              SEED,
        visualize:         true,
    };

    // 2. Load the arrival schedule shipped next to this demo.
    let schedule_path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/sample_arrivals.csv");
    let arrivals = FileArrivals::from_path(config.top_floor(), &schedule_path)?;
    println!(
        "Loaded {} scheduled rounds from {}",
        arrivals.remaining_rounds(),
        schedule_path.display()
    );

    // 3. Build and run.
    let mut sim = Sim::new(config.clone(), arrivals, ShortSighted)?;
    let stats = if config.visualize {
        let mut console = ConsoleVisualizer::stdout(&config);
        let stats = sim.run(NUM_ROUNDS, &mut console)?;
        if let Some(e) = console.take_error() {
            eprintln!("rendering error: {e}");
        }
        stats
    } else {
        sim.run(NUM_ROUNDS, &mut NoopVisualizer)?
    };

    // 4. Summary.
    println!();
    println!("{}", serde_json::to_string_pretty(&stats)?);

    Ok(())
}
