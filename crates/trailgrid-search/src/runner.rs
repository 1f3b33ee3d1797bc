//! The [`Runner`] — at-most-one-search-at-a-time run control.

use std::cell::Cell;

use trailgrid_core::Board;

use crate::algorithm::Algorithm;
use crate::pace::Pacer;
use crate::result::SearchResult;
use crate::tuning::Tuning;

/// Drives searches over a board: validates preconditions, resets the trail
/// of the previous run, invokes the selected algorithm and guards against
/// overlapping runs.
///
/// States are Idle → Running → Idle. The `simulating` flag is the single
/// piece of shared mutable state between an in-flight run and a new
/// request; everything else (board, visit mask, score tables) is owned by
/// the active run. There is no cancellation: a run always proceeds to
/// natural completion.
pub struct Runner {
    board: Board,
    tuning: Tuning,
    algorithm: Cell<Algorithm>,
    simulating: Cell<bool>,
}

impl Runner {
    /// A runner over `board` with default tuning and the default algorithm.
    pub fn new(board: Board) -> Self {
        Self::with_tuning(board, Tuning::new())
    }

    /// A runner sharing an externally held tuning handle.
    pub fn with_tuning(board: Board, tuning: Tuning) -> Self {
        Self {
            board,
            tuning,
            algorithm: Cell::new(Algorithm::default()),
            simulating: Cell::new(false),
        }
    }

    /// The board this runner drives (a shared handle).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The live tuning handle.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// The currently selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm.get()
    }

    /// Select the algorithm for subsequent runs. An in-flight run is
    /// unaffected.
    pub fn select(&self, algorithm: Algorithm) {
        self.algorithm.set(algorithm);
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        self.simulating.get()
    }

    /// Run the selected algorithm from the board's start to its end marker.
    ///
    /// Returns `None` without touching the board when a run is already in
    /// flight (not queued) or when either marker is missing — both are
    /// silent no-ops, not errors. Otherwise the previous trail is cleared,
    /// the search runs to completion and its result is returned; `found:
    /// false` is the normal no-path outcome.
    pub fn run(&self, pacer: &dyn Pacer) -> Option<SearchResult> {
        if self.simulating.get() {
            log::debug!("run request ignored: a search is already in flight");
            return None;
        }
        let Some(start) = self.board.find_start() else {
            log::debug!("run request ignored: no start marker");
            return None;
        };
        let Some(goal) = self.board.find_end() else {
            log::debug!("run request ignored: no end marker");
            return None;
        };

        let algorithm = self.algorithm.get();
        log::info!("starting {algorithm} from {start} to {goal}");

        self.simulating.set(true);
        self.board.clear_trail();
        let result = algorithm.run(&self.board, start, goal, &self.tuning, pacer);
        self.simulating.set(false);

        if result.found {
            log::info!("{algorithm} found a route of {} edges", result.edge_count());
        } else {
            log::info!("{algorithm} exhausted the search space, no route");
        }
        Some(result)
    }

    /// Clear the previous run's trail. No-op while a run is in flight.
    pub fn reset(&self) {
        if self.simulating.get() {
            log::debug!("reset ignored: a search is in flight");
            return;
        }
        self.board.clear_trail();
    }
}
