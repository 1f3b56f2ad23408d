//! tower — compares the three moving algorithms on one random workload.
//!
//! Every algorithm faces the identical arrival stream (same seed, one new
//! person per round in an eight-floor building) and runs for the same number
//! of rounds.  Each run writes a per-round CSV trace to `output/tower/`, and
//! the final table shows how the algorithms stack up.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use lift_arrivals::RandomArrivals;
use lift_core::SimConfig;
use lift_moving::{MovingAlgorithm, PushyPassenger, RandomAlgorithm, ShortSighted};
use lift_output::RoundTraceWriter;
use lift_sim::{RunStats, Sim};

// ── Constants ─────────────────────────────────────────────────────────────────

const NUM_FLOORS:        u32   = 8;
const NUM_ELEVATORS:     usize = 3;
const ELEVATOR_CAPACITY: usize = 4;
const SEED:              u64   = 7;
const NUM_ROUNDS:        u32   = 200;
const PEOPLE_PER_ROUND:  u32   = 1;

// ── Single comparison run ─────────────────────────────────────────────────────

fn run_one<M: MovingAlgorithm>(name: &str, moving: M) -> Result<RunStats> {
    let config = SimConfig {
        num_floors:        NUM_FLOORS,
        num_elevators:     NUM_ELEVATORS,
        elevator_capacity: ELEVATOR_CAPACITY,
        seed:              SEED,
        visualize:         false,
    };
    let arrivals = RandomArrivals::new(config.top_floor(), Some(PEOPLE_PER_ROUND));
    let mut sim = Sim::new(config, arrivals, moving)?;

    let trace_path = Path::new("output/tower").join(format!("{name}_trace.csv"));
    let mut trace = RoundTraceWriter::from_path(&trace_path)?;
    let stats = sim.run(NUM_ROUNDS, &mut trace)?;
    trace.finish()?;
    if let Some(e) = trace.take_error() {
        eprintln!("{name}: trace error: {e}");
    }

    Ok(stats)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lift_sim=info".parse()?),
        )
        .init();

    println!("=== tower — rust_lift algorithm comparison ===");
    println!(
        "Floors: {NUM_FLOORS}  |  Elevators: {NUM_ELEVATORS} × cap {ELEVATOR_CAPACITY}  |  Rounds: {NUM_ROUNDS}  |  Seed: {SEED}"
    );
    println!();

    std::fs::create_dir_all("output/tower")?;

    let t0 = Instant::now();
    let results = [
        ("random", run_one("random", RandomAlgorithm)?),
        ("pushy", run_one("pushy", PushyPassenger)?),
        ("short_sighted", run_one("short_sighted", ShortSighted)?),
    ];
    let elapsed = t0.elapsed();

    println!(
        "{:<16} {:>10} {:>8} {:>8} {:>8} {:>8}",
        "Algorithm", "Completed", "Total", "Min", "Max", "Avg"
    );
    println!("{}", "-".repeat(64));
    for (name, stats) in &results {
        println!(
            "{:<16} {:>10} {:>8} {:>8} {:>8} {:>8}",
            name,
            stats.people_completed,
            stats.total_people,
            fmt_rounds(stats.min_time),
            fmt_rounds(stats.max_time),
            fmt_avg(stats.avg_time),
        );
    }
    println!();
    println!(
        "{} runs in {:.3} s — traces in output/tower/",
        results.len(),
        elapsed.as_secs_f64()
    );

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn fmt_rounds(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn fmt_avg(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"))
}
