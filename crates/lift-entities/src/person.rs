//! People riding (and waiting for) elevators.

use lift_core::Floor;

/// A single person in the simulation.
///
/// Created by an arrival generator with a start and a target floor; waits,
/// rides, and eventually (with a competent moving algorithm) steps off at
/// the target.  `wait_time` and `complete` are private so that the
/// freeze-after-completion rule cannot be bypassed: once a person is marked
/// complete their recorded wait time never changes again.
#[derive(Debug, PartialEq, Eq)]
pub struct Person {
    /// Floor the person arrived on.  Fixed at creation.
    pub start: Floor,
    /// Floor the person wants to reach.  Fixed at creation; generators
    /// guarantee it differs from `start`.
    pub target: Floor,
    wait_time: u32,
    complete: bool,
}

impl Person {
    pub fn new(start: Floor, target: Floor) -> Self {
        Self {
            start,
            target,
            wait_time: 0,
            complete: false,
        }
    }

    /// Rounds this person has spent waiting or riding so far.
    #[inline]
    pub fn wait_time(&self) -> u32 {
        self.wait_time
    }

    /// `true` once the person has stepped off at `target`.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Add one round of waiting.  No-op after completion, so the recorded
    /// wait time is exactly the rounds spent in the system.
    pub fn increase_wait_time(&mut self) {
        if !self.complete {
            self.wait_time += 1;
        }
    }

    /// Mark the journey finished.  Freezes `wait_time`.
    pub fn mark_complete(&mut self) {
        self.complete = true;
    }

    /// Patience classifier over the current wait time.
    ///
    /// | waited (rounds) | level |
    /// |-----------------|-------|
    /// | 0–2             | 0     |
    /// | 3–4             | 1     |
    /// | 5–6             | 2     |
    /// | 7–8             | 3     |
    /// | 9+              | 4     |
    pub fn anger_level(&self) -> u8 {
        match self.wait_time {
            0..=2 => 0,
            3..=4 => 1,
            5..=6 => 2,
            7..=8 => 3,
            _ => 4,
        }
    }
}
