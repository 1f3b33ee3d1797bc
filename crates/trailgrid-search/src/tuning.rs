//! Live run configuration: [`Tuning`].

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use trailgrid_core::DirectionSet;

/// Step delay used when none is configured (the original visualizer's
/// fixed speed).
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(10);

#[derive(Debug, Clone)]
struct State {
    step_delay: Duration,
    directions: DirectionSet,
}

/// Externally tunable configuration for a run, shared by handle.
///
/// Cloning a `Tuning` yields another handle to the same state, so a speed
/// slider or connectivity toggle can adjust a run already in flight: the
/// algorithms re-read the values at each suspension point / expansion, so
/// changes apply from the next step onward and are never retroactive.
#[derive(Debug, Clone)]
pub struct Tuning {
    state: Rc<RefCell<State>>,
}

impl Tuning {
    /// Default tuning: [`DEFAULT_STEP_DELAY`], 4-connected.
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(State {
                step_delay: DEFAULT_STEP_DELAY,
                directions: DirectionSet::cardinal(),
            })),
        }
    }

    /// The current step delay.
    pub fn step_delay(&self) -> Duration {
        self.state.borrow().step_delay
    }

    /// Change the step delay, effective at the next suspension point.
    pub fn set_step_delay(&self, d: Duration) {
        self.state.borrow_mut().step_delay = d;
    }

    /// The current direction set (cloned out, so a caller's copy stays
    /// stable for the step it was read for).
    pub fn directions(&self) -> DirectionSet {
        self.state.borrow().directions.clone()
    }

    /// Change the direction set, effective at the next expansion.
    pub fn set_directions(&self, dirs: DirectionSet) {
        self.state.borrow_mut().directions = dirs;
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailgrid_core::Point;

    #[test]
    fn handles_share_state() {
        let a = Tuning::new();
        let b = a.clone();
        a.set_step_delay(Duration::from_millis(50));
        assert_eq!(b.step_delay(), Duration::from_millis(50));

        b.set_directions(DirectionSet::octile());
        assert_eq!(a.directions(), DirectionSet::octile());
    }

    #[test]
    fn defaults() {
        let t = Tuning::new();
        assert_eq!(t.step_delay(), DEFAULT_STEP_DELAY);
        assert_eq!(t.directions(), DirectionSet::cardinal());
    }

    #[test]
    fn read_copy_is_detached() {
        let t = Tuning::new();
        let dirs = t.directions();
        t.set_directions(DirectionSet::custom(vec![Point::new(0, 1)]));
        // The copy read before the change is unaffected.
        assert_eq!(dirs, DirectionSet::cardinal());
    }
}
