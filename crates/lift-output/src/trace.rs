//! CSV round trace.
//!
//! One summary row per round:
//!
//! ```csv
//! round,arrived,boarded,disembarked,waiting,riding,up,down,stay
//! 0,2,1,0,1,1,2,0,0
//! ```
//!
//! `waiting` and `riding` are end-of-round headcounts; the other columns
//! count events within the round.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use lift_core::{Direction, Round};
use lift_entities::{Elevator, Person, WaitingRegistry};
use lift_sim::Visualizer;

use crate::{OutputError, OutputResult};

const HEADER: [&str; 9] = [
    "round",
    "arrived",
    "boarded",
    "disembarked",
    "waiting",
    "riding",
    "up",
    "down",
    "stay",
];

/// Records one CSV row per round on any `Write` sink.
///
/// The header row is written at construction.  Write errors are stored
/// internally (hooks have no return value); check with
/// [`take_error`][Self::take_error] after the run, and call
/// [`finish`][Self::finish] to flush.
pub struct RoundTraceWriter<W: Write> {
    writer: csv::Writer<W>,
    round: Round,
    waiting_seen: usize,
    prev_waiting: usize,
    boarded: usize,
    disembarked: usize,
    finished: bool,
    last_error: Option<OutputError>,
}

impl RoundTraceWriter<File> {
    /// Create (or truncate) a trace file at `path` and write the header row.
    pub fn from_path(path: &Path) -> OutputResult<Self> {
        let file = File::create(path).map_err(OutputError::Io)?;
        Self::new(file)
    }
}

impl<W: Write> RoundTraceWriter<W> {
    /// Wrap any sink and write the header row.
    pub fn new(out: W) -> OutputResult<Self> {
        let mut writer = csv::Writer::from_writer(out);
        writer.write_record(HEADER)?;

        Ok(Self {
            writer,
            round: Round::ZERO,
            waiting_seen: 0,
            prev_waiting: 0,
            boarded: 0,
            disembarked: 0,
            finished: false,
            last_error: None,
        })
    }

    /// Flush the underlying writer.  Safe to call more than once.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: Write> Visualizer for RoundTraceWriter<W> {
    fn render_header(&mut self, round: Round) {
        self.round = round;
        // If nobody arrives this round the arrivals hook never fires, so the
        // headcount carries over unchanged.
        self.waiting_seen = self.prev_waiting;
        self.boarded = 0;
        self.disembarked = 0;
    }

    fn show_arrivals(&mut self, waiting: &WaitingRegistry) {
        self.waiting_seen = waiting.len();
    }

    fn show_boarding(&mut self, _person: &Person, _elevator: &Elevator) {
        self.boarded += 1;
    }

    fn show_disembarking(&mut self, _person: &Person, _elevator: &Elevator) {
        self.disembarked += 1;
    }

    fn show_elevator_moves(&mut self, elevators: &[Elevator], directions: &[Direction]) {
        let mut up = 0u32;
        let mut down = 0u32;
        let mut stay = 0u32;
        for direction in directions {
            match direction {
                Direction::Up => up += 1,
                Direction::Down => down += 1,
                Direction::Stay => stay += 1,
            }
        }

        let riding: usize = elevators.iter().map(|e| e.passengers().len()).sum();
        let arrived = self.waiting_seen.saturating_sub(self.prev_waiting);
        let waiting = self.waiting_seen.saturating_sub(self.boarded);

        let result = self
            .writer
            .write_record(&[
                self.round.0.to_string(),
                arrived.to_string(),
                self.boarded.to_string(),
                self.disembarked.to_string(),
                waiting.to_string(),
                riding.to_string(),
                up.to_string(),
                down.to_string(),
                stay.to_string(),
            ])
            .map_err(OutputError::from);
        self.store_err(result);

        self.prev_waiting = waiting;
    }
}
