//! Elevator movement directions.
//!
//! A direction is what a moving algorithm reports for each elevator at the
//! end of a round; the elevator's floor changes by at most one per round.
//! The set is closed — an elevator can only go up, down, or hold — so the
//! enum carries no escape hatch for future variants.

/// The vertical move an elevator makes at the end of a round.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Move one floor up.
    Up,
    /// Remain on the current floor (default state).
    #[default]
    Stay,
    /// Move one floor down.
    Down,
}

impl Direction {
    /// `true` for any direction that changes the elevator's floor.
    #[inline]
    pub fn is_moving(self) -> bool {
        !matches!(self, Direction::Stay)
    }

    /// Human-readable label, useful for CSV trace column values.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up   => "up",
            Direction::Stay => "stay",
            Direction::Down => "down",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
