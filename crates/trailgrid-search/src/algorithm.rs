//! The [`Algorithm`] selector.

use std::fmt;
use std::str::FromStr;

use trailgrid_core::{Board, Point};

use crate::astar::astar;
use crate::bfs::breadth_first;
use crate::dfs::depth_first;
use crate::pace::Pacer;
use crate::result::SearchResult;
use crate::tuning::Tuning;
use crate::ucs::uniform_cost;

/// The four search algorithms, in the order the original picker offered
/// them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    #[default]
    DepthFirst,
    BreadthFirst,
    AStar,
    Dijkstra,
}

impl Algorithm {
    /// All algorithms, selector order.
    pub const ALL: [Self; 4] = [
        Self::DepthFirst,
        Self::BreadthFirst,
        Self::AStar,
        Self::Dijkstra,
    ];

    /// Run this algorithm over the board.
    pub fn run(
        self,
        board: &Board,
        start: Point,
        goal: Point,
        tuning: &Tuning,
        pacer: &dyn Pacer,
    ) -> SearchResult {
        match self {
            Self::DepthFirst => depth_first(board, start, goal, tuning, pacer),
            Self::BreadthFirst => breadth_first(board, start, goal, tuning, pacer),
            Self::AStar => astar(board, start, goal, tuning, pacer),
            Self::Dijkstra => uniform_cost(board, start, goal, tuning, pacer),
        }
    }

    /// Human-readable name, as shown by a selector.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DepthFirst => "Depth First Search",
            Self::BreadthFirst => "Breadth First Search",
            Self::AStar => "A*",
            Self::Dijkstra => "Dijkstra",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl fmt::Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown algorithm {:?}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    /// Parse a selector name back to an algorithm (exact match).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|a| a.name() == s)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::NullPacer;

    #[test]
    fn names_round_trip() {
        for a in Algorithm::ALL {
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
        assert!("Best First".parse::<Algorithm>().is_err());
    }

    #[test]
    fn default_is_depth_first() {
        assert_eq!(Algorithm::default(), Algorithm::DepthFirst);
    }

    #[test]
    fn dispatch_runs_every_algorithm() {
        for a in Algorithm::ALL {
            let board = Board::parse("@..\n.#.\n..>").unwrap();
            let start = board.find_start().unwrap();
            let goal = board.find_end().unwrap();
            let result = a.run(&board, start, goal, &Tuning::new(), &NullPacer);
            assert!(result.found, "{a}");
        }
    }
}
