//! CSV-driven arrival schedule.
//!
//! # CSV format
//!
//! One row per scheduled round: the round number first, then an even count
//! of floor numbers read as alternating (start, target) pairs.  Whitespace
//! around fields is tolerated.  Rounds are 0-based loop indices.
//!
//! ```csv
//! 0, 1, 3
//! 3, 2, 5, 1, 4
//! 5, 4, 2
//! ```
//!
//! Row two above puts two people into round 3: one going from floor 2 to
//! floor 5 and one from floor 1 to floor 4.  Rounds absent from the file
//! have no arrivals.
//!
//! The whole file is parsed and validated at construction; a malformed row
//! is a load-time [`ArrivalError`], never a mid-run fault.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use lift_core::{Floor, Round, SimRng};
use lift_entities::Person;

use crate::{ArrivalError, ArrivalGenerator, ArrivalResult};

/// Replay arrivals from a per-round schedule loaded out of a CSV source.
///
/// Each round's entry is consumed the first time [`ArrivalGenerator::generate`]
/// is asked for it, so a schedule replays at most once per run.
pub struct FileArrivals {
    rounds: HashMap<Round, Vec<(Floor, Floor)>>,
}

impl FileArrivals {
    /// Load a schedule from a CSV file on disk.
    pub fn from_path(max_floor: Floor, path: &Path) -> ArrivalResult<Self> {
        let file = std::fs::File::open(path).map_err(ArrivalError::Io)?;
        Self::from_reader(max_floor, file)
    }

    /// Like [`FileArrivals::from_path`] but accepts any `Read` source.
    ///
    /// Useful for testing (pass a `std::io::Cursor`).
    pub fn from_reader<R: Read>(max_floor: Floor, reader: R) -> ArrivalResult<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rounds: HashMap<Round, Vec<(Floor, Floor)>> = HashMap::new();
        for (index, result) in csv_reader.records().enumerate() {
            let record = result?;

            let mut ints = Vec::with_capacity(record.len());
            for field in record.iter() {
                let n: u32 = field.parse().map_err(|_| ArrivalError::BadField {
                    row: index + 1,
                    field: field.to_string(),
                })?;
                ints.push(n);
            }
            let Some((&round, pairs)) = ints.split_first() else {
                continue;
            };
            let round = Round(round);

            if pairs.len() % 2 != 0 {
                return Err(ArrivalError::OddFloorCount { round, count: pairs.len() });
            }
            let mut entries = Vec::with_capacity(pairs.len() / 2);
            for pair in pairs.chunks_exact(2) {
                let (start, target) = (Floor(pair[0]), Floor(pair[1]));
                for floor in [start, target] {
                    if floor < Floor::GROUND || floor > max_floor {
                        return Err(ArrivalError::FloorOutOfRange { round, floor, max_floor });
                    }
                }
                if start == target {
                    return Err(ArrivalError::SameStartAndTarget { round, floor: start });
                }
                entries.push((start, target));
            }
            rounds.insert(round, entries);
        }

        tracing::info!(scheduled_rounds = rounds.len(), "arrival schedule loaded");
        Ok(Self { rounds })
    }

    /// Number of rounds that still have unreplayed arrivals.
    pub fn remaining_rounds(&self) -> usize {
        self.rounds.len()
    }
}

impl ArrivalGenerator for FileArrivals {
    fn generate(&mut self, round: Round, _rng: &mut SimRng) -> HashMap<Floor, Vec<Person>> {
        let mut arrivals: HashMap<Floor, Vec<Person>> = HashMap::new();
        let Some(entries) = self.rounds.remove(&round) else {
            return arrivals;
        };
        for (start, target) in entries {
            arrivals
                .entry(start)
                .or_default()
                .push(Person::new(start, target));
        }
        arrivals
    }
}
