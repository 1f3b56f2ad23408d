//! End-of-run statistics.

/// Aggregate figures for one simulation run.
///
/// The three `*_time` figures are taken over completed journeys only.  A
/// run in which nobody reached their target reports `None` for all three
/// rather than a made-up zero.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Rounds executed.
    pub num_iterations: u32,
    /// Everyone the generator ever introduced, whether they are still
    /// waiting, riding, or done.
    pub total_people: usize,
    /// People who reached their target floor.
    pub people_completed: usize,
    /// Longest completed journey, in rounds.
    pub max_time: Option<u32>,
    /// Shortest completed journey, in rounds.
    pub min_time: Option<u32>,
    /// Mean completed journey, in rounds.
    pub avg_time: Option<f64>,
}
