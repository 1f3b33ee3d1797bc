//! Uniform-cost search (the "Dijkstra" slot).

use trailgrid_core::{Board, Point};

use crate::astar::best_first;
use crate::pace::Pacer;
use crate::result::SearchResult;
use crate::tuning::Tuning;

/// Uniform-cost search: the [`best_first`] engine with the heuristic fixed
/// at zero for every cell, so expansion order is governed by the cost from
/// start alone. Same data structures and termination rule as
/// [`astar`](crate::astar::astar), and the same optimal route cost.
pub fn uniform_cost(
    board: &Board,
    start: Point,
    goal: Point,
    tuning: &Tuning,
    pacer: &dyn Pacer,
) -> SearchResult {
    best_first(board, start, goal, tuning, pacer, |_, _| 0.0)
}
