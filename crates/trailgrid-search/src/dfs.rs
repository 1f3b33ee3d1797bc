//! Depth-first backtracking search.

use trailgrid_core::{Board, CellState, DirectionSet, Point};

use crate::pace::Pacer;
use crate::result::SearchResult;
use crate::tuning::Tuning;
use crate::visit::VisitMask;

/// One level of the (conceptual) recursion: a cell being explored and the
/// index of the next direction to try. The direction list is captured when
/// the frame is entered, so a live connectivity change applies from the
/// next frame onward.
struct Frame {
    pos: Point,
    dirs: DirectionSet,
    next: usize,
}

/// Explore depth-first, backtracking on dead ends.
///
/// The first route that reaches the goal wins — traversal-order dependent,
/// not shortest. Each explored cell is painted `Visited` on entry; a cell
/// whose every direction fails is repainted `Empty` (the visual mark only —
/// the visit mask keeps it from being re-entered). On success every cell
/// still on the exploration stack becomes `Path`, unwound goal side first.
///
/// The recursion is carried on an explicit frame stack so grid size never
/// meets the call-stack limit; the mark / pause / descend / unmark / pause
/// contract is exactly that of the recursive formulation.
pub fn depth_first(
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
    let mut stack: Vec<Frame> = Vec::new();

    visited.mark(start);
    pacer.pause();
    stack.push(Frame {
        pos: start,
        dirs: tuning.directions(),
        next: 0,
    });

    let success = loop {
        let Some(frame) = stack.last_mut() else {
            break false;
        };

        let Some(&dir) = frame.dirs.offsets().get(frame.next) else {
            // Every direction failed: erase the visual mark and give the
            // observer a beat to see the backtrack.
            let pos = frame.pos;
            stack.pop();
            if pos != start {
                board.paint(pos, CellState::Empty);
            }
            pacer.pause();
            continue;
        };
        frame.next += 1;

        let n = frame.pos + dir;
        if !board.is_walkable(n) || visited.contains(n) {
            continue;
        }
        if n == goal {
            break true;
        }

        visited.mark(n);
        board.paint(n, CellState::Visited);
        pacer.pause();
        stack.push(Frame {
            pos: n,
            dirs: tuning.directions(),
            next: 0,
        });
    };

    if !success {
        return SearchResult::not_found();
    }

    // Unwind: the stack spells out the route, start first. Repaint it goal
    // side first, the order the recursive returns would.
    let mut route: Vec<Point> = stack.iter().map(|f| f.pos).collect();
    for &p in route.iter().skip(1).rev() {
        board.paint(p, CellState::Path);
    }
    route.push(goal);
    SearchResult::found(route)
}
