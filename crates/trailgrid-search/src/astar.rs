//! A* search, and the shared best-first core it exposes to
//! [`uniform_cost`](crate::ucs::uniform_cost).

use std::collections::BinaryHeap;

use trailgrid_core::{Board, CellState, Point};

use crate::distance::{euclidean, manhattan};
use crate::pace::Pacer;
use crate::path::{paint_interior, reconstruct};
use crate::result::SearchResult;
use crate::tuning::Tuning;
use crate::visit::VisitMask;

/// Open-set entry, ordered so a max-heap pops the smallest `f` first.
///
/// Entries are never updated in place: a queued cell whose score improves
/// keeps its stale priority (deliberate — see [`best_first`]).
struct OpenEntry {
    pos: Point,
    f: f64,
}

impl PartialEq for OpenEntry {
    fn eq(&self, other: &Self) -> bool {
        self.f.total_cmp(&other.f).is_eq()
    }
}

impl Eq for OpenEntry {}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other.f.total_cmp(&self.f)
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A* with a Manhattan heuristic and Euclidean step costs (so a diagonal
/// step, when the direction set has one, costs √2).
pub fn astar(
    board: &Board,
    start: Point,
    goal: Point,
    tuning: &Tuning,
    pacer: &dyn Pacer,
) -> SearchResult {
    best_first(board, start, goal, tuning, pacer, |p, goal| {
        f64::from(manhattan(p, goal))
    })
}

/// The best-first engine behind A* and uniform-cost search.
///
/// Per-cell `g` (cost from start) and `f` (`g` + heuristic) tables start at
/// infinity except for the start cell; the open set is a binary heap keyed
/// by `f`. Popping the goal reconstructs the route from the predecessor
/// table and paints its interior `Path`; any other pop finalizes the cell,
/// paints it `Visited` (start excepted) and pauses before relaxing its
/// walkable, unfinalized neighbors.
///
/// There is no decrease-key: a neighbor already in the open set is relaxed
/// in the tables but *not* re-pushed, so its queued priority can go stale
/// and pop later than its true score warrants. The pop still reads the
/// up-to-date tables, so routes stay correct; only the expansion order is
/// approximate. Accepted behavior, kept as is.
pub(crate) fn best_first(
    board: &Board,
    start: Point,
    goal: Point,
    tuning: &Tuning,
    pacer: &dyn Pacer,
    heuristic: impl Fn(Point, Point) -> f64,
) -> SearchResult {
    if start == goal {
        return SearchResult::found(vec![start]);
    }
    if !board.is_walkable(start) || !board.is_walkable(goal) {
        return SearchResult::not_found();
    }

    let width = board.width();
    let len = (width * board.height()) as usize;
    let idx = |p: Point| (p.y * width + p.x) as usize;

    let mut g = vec![f64::INFINITY; len];
    let mut f = vec![f64::INFINITY; len];
    let mut parent: Vec<Option<Point>> = vec![None; len];
    let mut in_open = vec![false; len];
    let mut finalized = VisitMask::new(width, board.height());

    g[idx(start)] = 0.0;
    f[idx(start)] = heuristic(start, goal);
    in_open[idx(start)] = true;

    let mut open = BinaryHeap::new();
    open.push(OpenEntry {
        pos: start,
        f: f[idx(start)],
    });

    while let Some(OpenEntry { pos: current, .. }) = open.pop() {
        let ci = idx(current);
        in_open[ci] = false;

        if current == goal {
            let route = reconstruct(|p| parent[idx(p)], start, goal);
            paint_interior(board, &route);
            return SearchResult::found(route);
        }

        finalized.mark(current);
        if current != start {
            board.paint(current, CellState::Visited);
        }
        pacer.pause();

        let dirs = tuning.directions();
        for n in board.neighbors(current, &dirs) {
            if board.at(n).is_wall() || finalized.contains(n) {
                continue;
            }
            let ni = idx(n);
            let tentative = g[ci] + euclidean(current, n);
            if tentative < g[ni] {
                parent[ni] = Some(current);
                g[ni] = tentative;
                f[ni] = tentative + heuristic(n, goal);
                if !in_open[ni] {
                    in_open[ni] = true;
                    open.push(OpenEntry { pos: n, f: f[ni] });
                }
            }
        }
    }

    SearchResult::not_found()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bfs::breadth_first;
    use crate::pace::NullPacer;
    use trailgrid_core::DirectionSet;

    fn run(board: &Board) -> SearchResult {
        let start = board.find_start().unwrap();
        let goal = board.find_end().unwrap();
        astar(board, start, goal, &Tuning::new(), &NullPacer)
    }

    #[test]
    fn worked_three_by_three() {
        let board = Board::parse("@..\n.#.\n..>").unwrap();
        let result = run(&board);
        assert!(result.found);
        assert_eq!(result.edge_count(), 4);
    }

    #[test]
    fn cost_matches_bfs_on_unit_grids() {
        // With 4-connected movement every step costs 1.0, so the A* route
        // must have exactly the BFS edge count.
        let maps = [
            "@....\n.###.\n.....\n.###.\n....>",
            "@#...\n.#.#.\n.#.#.\n...#>",
            "@....\n.....\n....>",
        ];
        for map in maps {
            let a = Board::parse(map).unwrap();
            let b = Board::parse(map).unwrap();
            let start = a.find_start().unwrap();
            let goal = a.find_end().unwrap();
            let astar_result = astar(&a, start, goal, &Tuning::new(), &NullPacer);
            let bfs_result = breadth_first(&b, start, goal, &Tuning::new(), &NullPacer);
            assert!(astar_result.found && bfs_result.found, "map:\n{map}");
            assert_eq!(
                astar_result.edge_count(),
                bfs_result.edge_count(),
                "map:\n{map}"
            );
        }
    }

    #[test]
    fn disconnected_returns_not_found() {
        let board = Board::parse("@#>").unwrap();
        assert_eq!(run(&board), SearchResult::not_found());
    }

    #[test]
    fn start_equals_goal() {
        let board = Board::new(2, 2);
        let p = Point::new(0, 1);
        let result = astar(&board, p, p, &Tuning::new(), &NullPacer);
        assert_eq!(result, SearchResult::found(vec![p]));
    }

    #[test]
    fn diagonal_steps_cost_sqrt_two() {
        // On an open board with diagonals enabled the straight diagonal
        // (4 steps of cost √2) beats any 8-step cardinal route.
        let board = Board::parse("@....\n.....\n.....\n.....\n....>").unwrap();
        let start = board.find_start().unwrap();
        let goal = board.find_end().unwrap();
        let tuning = Tuning::new();
        tuning.set_directions(DirectionSet::octile());
        let result = astar(&board, start, goal, &tuning, &NullPacer);
        assert!(result.found);
        assert_eq!(result.edge_count(), 4);
        for pair in result.path.windows(2) {
            assert_eq!(pair[1] - pair[0], Point::new(1, 1));
        }
    }

    #[test]
    fn paints_route_interior() {
        let board = Board::parse("@...>").unwrap();
        let result = run(&board);
        assert!(result.found);
        assert_eq!(board.to_string(), "@***>");
    }

    #[test]
    fn goal_in_wall_is_unreachable() {
        let board = Board::parse("@..").unwrap();
        let result = astar(
            &board,
            Point::new(0, 0),
            Point::new(5, 5),
            &Tuning::new(),
            &NullPacer,
        );
        assert_eq!(result, SearchResult::not_found());
    }
}
