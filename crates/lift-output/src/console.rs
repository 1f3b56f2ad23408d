//! Per-round text rendering of the building.
//!
//! Each round prints a banner, the arrival/boarding/alighting events, and a
//! top-down diagram of the shaft: one line per floor, one `[riders/capacity]`
//! cell per car on its current floor.  Waiting people are drawn as one glyph
//! each, from `.` (just arrived) to `!` (waiting nine rounds or more).

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use lift_core::{Direction, Floor, Round, SimConfig};
use lift_entities::{Elevator, Person, WaitingRegistry};
use lift_sim::Visualizer;

/// Renders the run as text on any `Write` sink.
///
/// Write errors are stored internally (hooks have no return value); check
/// with [`take_error`][Self::take_error] after the run.
pub struct ConsoleVisualizer<W: Write> {
    out: W,
    num_floors: u32,
    pace: bool,
    last_error: Option<io::Error>,
}

impl ConsoleVisualizer<io::Stdout> {
    /// A paced renderer on standard output: the [`Visualizer::wait`] hook
    /// really sleeps, so rounds tick by at a watchable speed.
    pub fn stdout(config: &SimConfig) -> Self {
        Self {
            out: io::stdout(),
            num_floors: config.num_floors,
            pace: true,
            last_error: None,
        }
    }
}

impl<W: Write> ConsoleVisualizer<W> {
    /// An unpaced renderer on an arbitrary sink.
    pub fn new(config: &SimConfig, out: W) -> Self {
        Self {
            out,
            num_floors: config.num_floors,
            pace: false,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    /// Unwrap the inner sink (e.g. to inspect a buffer in tests).
    pub fn into_inner(self) -> W {
        self.out
    }

    fn store_err(&mut self, result: io::Result<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn render_building(&mut self, elevators: &[Elevator], directions: &[Direction]) -> io::Result<()> {
        for number in (1..=self.num_floors).rev() {
            let floor = Floor(number);
            let label = floor.to_string();
            write!(self.out, "  {label:>4}")?;
            for elevator in elevators {
                if elevator.current_floor() == floor {
                    write!(self.out, "  [{}/{}]", elevator.passengers().len(), elevator.capacity())?;
                } else {
                    write!(self.out, "  .")?;
                }
            }
            writeln!(self.out)?;
        }
        let moves: Vec<&str> = directions.iter().map(|d| d.as_str()).collect();
        writeln!(self.out, "  moves: {}", moves.join(", "))
    }
}

impl<W: Write> Visualizer for ConsoleVisualizer<W> {
    fn render_header(&mut self, round: Round) {
        let result = writeln!(self.out, "\n──────── {round} ────────");
        self.store_err(result);
    }

    fn show_arrivals(&mut self, waiting: &WaitingRegistry) {
        let mut line = String::from("  waiting");
        for (floor, queue) in waiting.iter() {
            if queue.is_empty() {
                continue;
            }
            line.push_str(&format!("  {floor}:"));
            for person in queue {
                line.push(anger_glyph(person));
            }
        }
        let result = writeln!(self.out, "{line}");
        self.store_err(result);
    }

    fn show_boarding(&mut self, person: &Person, _elevator: &Elevator) {
        let result = writeln!(self.out, "  board  {} → {}", person.start, person.target);
        self.store_err(result);
    }

    fn show_disembarking(&mut self, person: &Person, _elevator: &Elevator) {
        let result = writeln!(
            self.out,
            "  arrive {} after {} rounds",
            person.target,
            person.wait_time()
        );
        self.store_err(result);
    }

    fn show_elevator_moves(&mut self, elevators: &[Elevator], directions: &[Direction]) {
        let result = self.render_building(elevators, directions);
        self.store_err(result);
    }

    fn wait(&mut self, pause: Duration) {
        if self.pace {
            thread::sleep(pause);
        }
    }
}

/// One glyph per waiting person, angrier the longer they stand.
fn anger_glyph(person: &Person) -> char {
    match person.anger_level() {
        0 => '.',
        1 => 'o',
        2 => 'x',
        3 => 'X',
        _ => '!',
    }
}
