//! The [`DirectionSet`] — the ordered neighbor offsets defining grid
//! connectivity.

use crate::geom::Point;

/// Left, right, up, down — the classic 4-connected exploration order.
pub const CARDINAL: [Point; 4] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
];

/// The four cardinals followed by the four diagonals.
pub const OCTILE: [Point; 8] = [
    Point::new(-1, 0),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(0, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
    Point::new(1, 1),
];

/// An ordered list of `(dx, dy)` offsets.
///
/// The order is significant: it is the traversal tie-break for depth-first
/// and breadth-first search, and must stay stable within one run step.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectionSet {
    offsets: Vec<Point>,
}

impl DirectionSet {
    /// 4-connected movement in [`CARDINAL`] order.
    pub fn cardinal() -> Self {
        Self {
            offsets: CARDINAL.to_vec(),
        }
    }

    /// 8-connected movement in [`OCTILE`] order.
    pub fn octile() -> Self {
        Self {
            offsets: OCTILE.to_vec(),
        }
    }

    /// An arbitrary offset list. The caller is responsible for offsets
    /// actually being adjacent steps.
    pub fn custom(offsets: Vec<Point>) -> Self {
        Self { offsets }
    }

    /// The offsets, in traversal order.
    #[inline]
    pub fn offsets(&self) -> &[Point] {
        &self.offsets
    }

    /// Number of offsets.
    #[inline]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::cardinal()
    }
}

impl<'a> IntoIterator for &'a DirectionSet {
    type Item = Point;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Point>>;

    fn into_iter(self) -> Self::IntoIter {
        self.offsets.iter().copied()
    }
}
