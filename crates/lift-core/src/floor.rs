//! Building floors.
//!
//! # Design
//!
//! Floors are numbered from 1 (the ground floor) up to the building's
//! `num_floors`.  Number 0 is reserved as the [`Floor::NONE`] sentinel:
//! "no floor", used for an elevator that currently has no target.  Storing
//! the sentinel in-band keeps `Floor` a bare `u32` that is `Copy`, ordered,
//! and free to compare, at the cost of one reserved value that never names
//! a real location.

use std::fmt;

/// A building floor number.
///
/// Real floors are `1..=num_floors`; `Floor(0)` is the [`Floor::NONE`]
/// sentinel and never appears as a location.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Floor(pub u32);

impl Floor {
    /// Sentinel meaning "no floor" — an elevator with no current target.
    pub const NONE: Floor = Floor(0);
    /// The lowest real floor.  New elevators start here.
    pub const GROUND: Floor = Floor(1);

    /// `true` if this is the [`Floor::NONE`] sentinel.
    #[inline]
    pub fn is_none(self) -> bool {
        self == Floor::NONE
    }

    /// The floor directly above.
    #[inline]
    pub fn above(self) -> Floor {
        Floor(self.0 + 1)
    }

    /// The floor directly below.
    ///
    /// # Panics
    /// Panics in debug mode when called on the ground floor or the sentinel.
    #[inline]
    pub fn below(self) -> Floor {
        debug_assert!(self.0 > 1, "no floor below {self}");
        Floor(self.0 - 1)
    }

    /// Absolute distance in floors between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Floor) -> u32 {
        self.0.abs_diff(other.0)
    }
}

impl fmt::Display for Floor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}
