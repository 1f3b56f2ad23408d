use lift_core::{Floor, Round};
use thiserror::Error;

/// Failures while loading an arrival schedule.
///
/// All variants are load-time: once a `FileArrivals` is constructed, its
/// `generate` calls cannot fail.
#[derive(Debug, Error)]
pub enum ArrivalError {
    #[error("schedule row {row}: {field:?} is not a whole number")]
    BadField { row: usize, field: String },

    #[error("schedule for {round} has an odd floor count ({count}); arrivals come in (start, target) pairs")]
    OddFloorCount { round: Round, count: usize },

    #[error("schedule for {round} names floor {floor}, outside the building (F1..={max_floor})")]
    FloorOutOfRange {
        round: Round,
        floor: Floor,
        max_floor: Floor,
    },

    #[error("schedule for {round} has a person starting and ending on {floor}")]
    SameStartAndTarget { round: Round, floor: Floor },

    #[error("malformed schedule: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ArrivalResult<T> = Result<T, ArrivalError>;
