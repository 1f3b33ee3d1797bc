//! Route reconstruction and painting.

use trailgrid_core::{Board, CellState, Point};

/// Follow a predecessor relation backward from `goal` to `start` and return
/// the route in forward order, inclusive of both endpoints.
///
/// `parent_of` must form a chain ending at `start`; the searches guarantee
/// this for any goal they report reaching.
pub(crate) fn reconstruct(
    parent_of: impl Fn(Point) -> Option<Point>,
    start: Point,
    goal: Point,
) -> Vec<Point> {
    let mut route = vec![goal];
    let mut cur = goal;
    while cur != start {
        let Some(prev) = parent_of(cur) else {
            break;
        };
        route.push(prev);
        cur = prev;
    }
    route.reverse();
    route
}

/// Paint the interior of a start-to-goal route as `Path`, goal side first
/// (the order a backtracking unwind reveals it). Endpoints are skipped.
pub(crate) fn paint_interior(board: &Board, route: &[Point]) {
    if route.len() < 3 {
        return;
    }
    for &p in route[1..route.len() - 1].iter().rev() {
        board.paint(p, CellState::Path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_parents() {
        let a = Point::new(0, 0);
        let b = Point::new(1, 0);
        let c = Point::new(2, 0);
        let parent = move |p: Point| {
            if p == c {
                Some(b)
            } else if p == b {
                Some(a)
            } else {
                None
            }
        };
        assert_eq!(reconstruct(parent, a, c), vec![a, b, c]);
    }

    #[test]
    fn paint_skips_endpoints() {
        let board = Board::parse("@..>").unwrap();
        let route = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(2, 0),
            Point::new(3, 0),
        ];
        paint_interior(&board, &route);
        assert_eq!(board.to_string(), "@**>");
    }

    #[test]
    fn paint_noop_on_trivial_routes() {
        let board = Board::parse("@>").unwrap();
        paint_interior(&board, &[Point::new(0, 0), Point::new(1, 0)]);
        assert_eq!(board.to_string(), "@>");
    }
}
