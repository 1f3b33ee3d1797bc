//! The per-run [`VisitMask`].

use trailgrid_core::Point;

/// "Already processed" marks for one search run.
///
/// Created fresh per run and discarded afterwards. Entries only ever go
/// `false` → `true`; there is deliberately no way to unmark a cell — a
/// depth-first backtrack erases the *visual* mark, never this one.
#[derive(Debug, Clone)]
pub struct VisitMask {
    bits: Vec<bool>,
    width: i32,
    height: i32,
}

impl VisitMask {
    /// A mask of the given dimensions, all unvisited.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            bits: vec![false; (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Mark `p` visited. Out-of-bounds points are ignored.
    pub fn mark(&mut self, p: Point) {
        if let Some(i) = self.index(p) {
            self.bits[i] = true;
        }
    }

    /// Whether `p` has been visited. Out-of-bounds points read as `false`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index(p).is_some_and(|i| self.bits[i])
    }
}
