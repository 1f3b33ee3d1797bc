//! Breadth-first shortest-path search.

use std::collections::VecDeque;

use trailgrid_core::{Board, CellState, Point};

use crate::pace::Pacer;
use crate::result::SearchResult;
use crate::tuning::Tuning;
use crate::visit::VisitMask;

/// Explore breadth-first; guarantees minimum edge count over the grid graph
/// induced by the current direction set.
///
/// The frontier is a queue of *path prefixes* — the positions after start,
/// oldest first — so the route needs no separate predecessor map: the
/// prefix whose tail touches the goal *is* the route. Neighbors are marked
/// visited and painted `Visited` at enqueue time, which is what prevents
/// duplicate enqueues; prefixes expand in non-decreasing length order, so
/// the first touch of the goal is optimal. One pause happens per dequeued
/// prefix, batching the visual updates of a whole expansion.
pub fn breadth_first(
    board: &Board,
    start: Point,
    goal: Point,
    tuning: &Tuning,
    pacer: &dyn Pacer,
) -> SearchResult {
    if start == goal {
        return SearchResult::found(vec![start]);
    }
    if !board.is_walkable(start) {
        return SearchResult::not_found();
    }

    let mut visited = VisitMask::new(board.width(), board.height());
    visited.mark(start);

    // The empty prefix stands for start itself.
    let mut queue: VecDeque<Vec<Point>> = VecDeque::from([Vec::new()]);

    while let Some(prefix) = queue.pop_front() {
        pacer.pause();

        let tail = prefix.last().copied().unwrap_or(start);
        let dirs = tuning.directions();
        for n in board.neighbors(tail, &dirs) {
            if visited.contains(n) || board.at(n).is_wall() {
                continue;
            }
            if n == goal {
                // Stop instantly: the goal is never enqueued or marked.
                for &p in prefix.iter().rev() {
                    board.paint(p, CellState::Path);
                }
                let mut route = Vec::with_capacity(prefix.len() + 2);
                route.push(start);
                route.extend_from_slice(&prefix);
                route.push(goal);
                return SearchResult::found(route);
            }
            visited.mark(n);
            board.paint(n, CellState::Visited);
            let mut next = prefix.clone();
            next.push(n);
            queue.push_back(next);
        }
    }

    SearchResult::not_found()
}
