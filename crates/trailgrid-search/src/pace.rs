//! Cooperative step pacing: [`Pacer`].

use std::thread;

use crate::tuning::Tuning;

/// The suspension seam between algorithm steps.
///
/// The algorithms call [`pause`](Pacer::pause) at well-defined points
/// (after painting a cell Visited, and after un-painting one on a
/// depth-first backtrack) so that intermediate state can be observed at a
/// human pace. Everything runs on the one logical thread; a pacer merely
/// stalls it.
pub trait Pacer {
    /// Suspend between steps.
    fn pause(&self);
}

/// Sleeps for the tuning's *current* step delay, re-read at every pause so
/// speed changes apply mid-run. Zero delays skip the sleep entirely.
#[derive(Debug, Clone)]
pub struct SleepPacer {
    tuning: Tuning,
}

impl SleepPacer {
    pub fn new(tuning: Tuning) -> Self {
        Self { tuning }
    }
}

impl Pacer for SleepPacer {
    fn pause(&self) {
        let d = self.tuning.step_delay();
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Never suspends. For tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPacer;

impl Pacer for NullPacer {
    fn pause(&self) {}
}
