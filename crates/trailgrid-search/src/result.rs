//! The [`SearchResult`] returned by every algorithm.

use trailgrid_core::Point;

/// Outcome of one search run.
///
/// When `found` is true, `path` holds the route **inclusive of both start
/// and goal** (the painted trail on the board, by contrast, never touches
/// the start and end cells themselves). When `found` is false — a normal
/// outcome, not an error — `path` is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub found: bool,
    pub path: Vec<Point>,
}

impl SearchResult {
    /// A successful result over the given start-to-goal route.
    pub fn found(path: Vec<Point>) -> Self {
        Self { found: true, path }
    }

    /// The search space was exhausted without reaching the goal.
    pub fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
        }
    }

    /// Number of edges in the path (0 for an empty or single-cell path).
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}
