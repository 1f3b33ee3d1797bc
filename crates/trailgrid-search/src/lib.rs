//! **trailgrid-search** — the pathfinding engine of the grid visualizer.
//!
//! Four graph searches over a [`Board`](trailgrid_core::Board), sharing one
//! step/visit/backtrack protocol: every explored cell is painted
//! [`Visited`](trailgrid_core::CellState::Visited) through the board's
//! change stream, the run pauses at each step through a [`Pacer`], and the
//! winning route is painted [`Path`](trailgrid_core::CellState::Path).
//!
//! | Algorithm | Route | Notes |
//! |---|---|---|
//! | [`depth_first`] | first found | explicit-stack backtracker |
//! | [`breadth_first`] | fewest edges | prefix-queue frontier |
//! | [`astar`] | cheapest | Manhattan heuristic, Euclidean steps |
//! | [`uniform_cost`] | cheapest | A* with a zero heuristic |
//!
//! [`Runner`] enforces at-most-one run at a time and reset-before-run;
//! [`Tuning`] carries the live step delay and direction set. "No path"
//! is a normal [`SearchResult`] outcome, never an error.

mod astar;
mod bfs;
mod dfs;
mod path;
mod ucs;

pub mod algorithm;
pub mod distance;
pub mod pace;
pub mod result;
pub mod runner;
pub mod tuning;
pub mod visit;

pub use algorithm::{Algorithm, UnknownAlgorithm};
pub use astar::astar;
pub use bfs::breadth_first;
pub use dfs::depth_first;
pub use pace::{NullPacer, Pacer, SleepPacer};
pub use result::SearchResult;
pub use runner::Runner;
pub use tuning::{DEFAULT_STEP_DELAY, Tuning};
pub use ucs::uniform_cost;
pub use visit::VisitMask;

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use trailgrid_core::Point;

    #[test]
    fn search_result_round_trip() {
        let r = SearchResult::found(vec![Point::new(0, 0), Point::new(1, 0)]);
        let json = serde_json::to_string(&r).unwrap();
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn algorithm_round_trip() {
        let json = serde_json::to_string(&Algorithm::AStar).unwrap();
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Algorithm::AStar);
    }
}
