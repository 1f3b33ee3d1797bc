//! The [`Board`] — a 2D grid of [`CellState`]s with shared storage.
//!
//! A `Board` is a handle to shared backing storage: cloning one yields
//! another handle to the **same** cells, so the run controller, the editing
//! layer and test observers can all hold the board at once without
//! lifetimes crossing between them. Single-threaded by design
//! (`Rc<RefCell<...>>`).
//!
//! Mutation is split in two (engine requirement): the editing and painting
//! methods are the pure model-mutation API, while [`watch`](Board::watch)
//! subscribes an observer to the resulting per-cell change stream. The
//! engine itself never renders anything.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cell::CellState;
use crate::directions::DirectionSet;
use crate::geom::Point;

type Watcher = Box<dyn FnMut(Point, CellState)>;

#[derive(Debug, Clone)]
struct Cells {
    cells: Vec<CellState>,
    width: i32,
    height: i32,
}

impl Cells {
    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

/// A rectangular grid of [`CellState`]s.
///
/// Dimensions are fixed at construction and never change for the lifetime
/// of the board (and thus for the duration of any run on it).
#[derive(Clone)]
pub struct Board {
    buf: Rc<RefCell<Cells>>,
    watchers: Rc<RefCell<Vec<Watcher>>>,
}

impl Board {
    /// Create a new board filled with [`CellState::Empty`].
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            buf: Rc::new(RefCell::new(Cells {
                cells: vec![CellState::Empty; (width * height) as usize],
                width,
                height,
            })),
            watchers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> i32 {
        self.buf.borrow().width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> i32 {
        self.buf.borrow().height
    }

    /// Whether `p` lies inside the board.
    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        let buf = self.buf.borrow();
        p.x >= 0 && p.y >= 0 && p.x < buf.width && p.y < buf.height
    }

    /// Read the cell at `p`. Returns `Empty` for out-of-bounds points;
    /// use [`in_bounds`](Self::in_bounds) to tell the difference.
    pub fn at(&self, p: Point) -> CellState {
        if !self.in_bounds(p) {
            return CellState::Empty;
        }
        let buf = self.buf.borrow();
        let i = buf.index(p);
        buf.cells[i]
    }

    /// Whether a search may enter `p`: in bounds and not a wall.
    #[inline]
    pub fn is_walkable(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.at(p).is_wall()
    }

    /// In-bounds neighbors of `p`, lazily, in direction-list order.
    ///
    /// No walkability filtering: the algorithms decide what a wall means.
    pub fn neighbors<'a>(
        &'a self,
        p: Point,
        dirs: &'a DirectionSet,
    ) -> impl Iterator<Item = Point> + 'a {
        dirs.into_iter().map(move |d| p + d).filter(|&n| self.in_bounds(n))
    }

    // -----------------------------------------------------------------------
    // Editing (user-placed cells)
    // -----------------------------------------------------------------------

    /// Place the start marker at `p`, clearing any previous start so that at
    /// most one exists. No-op out of bounds.
    pub fn place_start(&self, p: Point) {
        self.place_unique(p, CellState::Start);
    }

    /// Place the end marker at `p`, clearing any previous end so that at
    /// most one exists. No-op out of bounds.
    pub fn place_end(&self, p: Point) {
        self.place_unique(p, CellState::End);
    }

    fn place_unique(&self, p: Point, state: CellState) {
        if !self.in_bounds(p) {
            return;
        }
        if let Some(old) = self.find(state) {
            self.set(old, CellState::Empty);
        }
        self.set(p, state);
    }

    /// Turn `p` into a wall. No-op out of bounds.
    pub fn set_wall(&self, p: Point) {
        if self.in_bounds(p) {
            self.set(p, CellState::Wall);
        }
    }

    /// Erase `p` back to `Empty`, whatever it held. No-op out of bounds.
    pub fn erase(&self, p: Point) {
        if self.in_bounds(p) {
            self.set(p, CellState::Empty);
        }
    }

    /// Position of the start marker, if one has been placed.
    pub fn find_start(&self) -> Option<Point> {
        self.find(CellState::Start)
    }

    /// Position of the end marker, if one has been placed.
    pub fn find_end(&self) -> Option<Point> {
        self.find(CellState::End)
    }

    fn find(&self, state: CellState) -> Option<Point> {
        let buf = self.buf.borrow();
        buf.cells.iter().position(|&c| c == state).map(|i| {
            let i = i as i32;
            Point::new(i % buf.width, i / buf.width)
        })
    }

    // -----------------------------------------------------------------------
    // Search-side mutation
    // -----------------------------------------------------------------------

    /// Write a transient search mark (`Visited`, `Path` or `Empty`) to `p`.
    ///
    /// Silently refuses to overwrite a `Start` or `End` cell and ignores
    /// out-of-bounds points: the searches only ever repaint *other* cells.
    pub fn paint(&self, p: Point, state: CellState) {
        if !self.in_bounds(p) {
            return;
        }
        let current = self.at(p);
        if matches!(current, CellState::Start | CellState::End) {
            return;
        }
        self.set(p, state);
    }

    /// Repaint every cell not in {Start, End, Wall} back to `Empty`,
    /// erasing the `Visited`/`Path` trail of a previous run.
    pub fn clear_trail(&self) {
        let (w, h) = (self.width(), self.height());
        for y in 0..h {
            for x in 0..w {
                let p = Point::new(x, y);
                if !self.at(p).is_fixed() {
                    self.set(p, CellState::Empty);
                }
            }
        }
    }

    /// Write `state` at in-bounds `p`, notifying watchers on change.
    fn set(&self, p: Point, state: CellState) {
        {
            let mut buf = self.buf.borrow_mut();
            let i = buf.index(p);
            if buf.cells[i] == state {
                return;
            }
            buf.cells[i] = state;
        }
        // Cells borrow released above: watchers may read the board freely.
        // Watchers must not mutate it (would re-enter this list).
        let mut watchers = self.watchers.borrow_mut();
        for w in watchers.iter_mut() {
            w(p, state);
        }
    }

    // -----------------------------------------------------------------------
    // Observation
    // -----------------------------------------------------------------------

    /// Subscribe to the per-cell change stream.
    ///
    /// `f` is called once for every *effective* state change — edits and
    /// search repaints alike — with the position and the new state. Watchers
    /// must not mutate the board.
    pub fn watch(&self, f: impl FnMut(Point, CellState) + 'static) {
        self.watchers.borrow_mut().push(Box::new(f));
    }

    // -----------------------------------------------------------------------
    // Text maps
    // -----------------------------------------------------------------------

    /// Build a board from an ASCII map.
    ///
    /// `.` empty, `#` wall, `@` start, `>` end (plus `o`/`*` for the
    /// transient marks, accepted so a rendered board parses back). Lines
    /// must all have the same width; at most one `@` and one `>`.
    pub fn parse(s: &str) -> Result<Self, ParseBoardError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseBoardError::Empty);
        }
        let mut cells = Vec::new();
        let mut width = -1i32;
        let mut height = 0i32;
        let mut seen_start = false;
        let mut seen_end = false;

        for (lineno, line) in s.lines().enumerate() {
            let mut w = 0i32;
            for c in line.chars() {
                let state = CellState::from_char(c)
                    .ok_or(ParseBoardError::UnknownChar(c))?;
                match state {
                    CellState::Start if seen_start => {
                        return Err(ParseBoardError::DuplicateStart);
                    }
                    CellState::Start => seen_start = true,
                    CellState::End if seen_end => {
                        return Err(ParseBoardError::DuplicateEnd);
                    }
                    CellState::End => seen_end = true,
                    _ => {}
                }
                cells.push(state);
                w += 1;
            }
            if width < 0 {
                width = w;
            } else if w != width {
                return Err(ParseBoardError::RaggedLine(lineno));
            }
            height += 1;
        }

        Ok(Self {
            buf: Rc::new(RefCell::new(Cells {
                cells,
                width,
                height,
            })),
            watchers: Rc::new(RefCell::new(Vec::new())),
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buf = self.buf.borrow();
        for y in 0..buf.height {
            for x in 0..buf.width {
                write!(f, "{}", buf.cells[buf.index(Point::new(x, y))])?;
            }
            if y + 1 < buf.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{})\n{}", self.width(), self.height(), self)
    }
}

// ---------------------------------------------------------------------------
// ParseBoardError
// ---------------------------------------------------------------------------

/// Error returned by [`Board::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The input was empty after trimming.
    Empty,
    /// A character that is not a map character.
    UnknownChar(char),
    /// Line (0-based) whose width differs from the first line's.
    RaggedLine(usize),
    /// More than one `@`.
    DuplicateStart,
    /// More than one `>`.
    DuplicateEnd,
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty board map"),
            Self::UnknownChar(c) => write!(f, "unknown map character {c:?}"),
            Self::RaggedLine(n) => write!(f, "line {n} has inconsistent width"),
            Self::DuplicateStart => write!(f, "more than one start marker"),
            Self::DuplicateEnd => write!(f, "more than one end marker"),
        }
    }
}

impl std::error::Error for ParseBoardError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn new_board_is_empty() {
        let b = Board::new(3, 2);
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 2);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(b.at(Point::new(x, y)), CellState::Empty);
            }
        }
    }

    #[test]
    fn clones_share_storage() {
        let a = Board::new(2, 2);
        let b = a.clone();
        a.set_wall(Point::new(1, 1));
        assert_eq!(b.at(Point::new(1, 1)), CellState::Wall);
    }

    #[test]
    fn place_start_is_unique() {
        let b = Board::new(3, 1);
        b.place_start(Point::new(0, 0));
        b.place_start(Point::new(2, 0));
        assert_eq!(b.at(Point::new(0, 0)), CellState::Empty);
        assert_eq!(b.at(Point::new(2, 0)), CellState::Start);
        assert_eq!(b.find_start(), Some(Point::new(2, 0)));
    }

    #[test]
    fn place_end_is_unique() {
        let b = Board::new(3, 1);
        b.place_end(Point::new(1, 0));
        b.place_end(Point::new(0, 0));
        assert_eq!(b.find_end(), Some(Point::new(0, 0)));
        assert_eq!(b.at(Point::new(1, 0)), CellState::Empty);
    }

    #[test]
    fn erase_removes_anything() {
        let b = Board::new(2, 1);
        b.place_start(Point::new(0, 0));
        b.set_wall(Point::new(1, 0));
        b.erase(Point::new(0, 0));
        b.erase(Point::new(1, 0));
        assert_eq!(b.find_start(), None);
        assert_eq!(b.at(Point::new(1, 0)), CellState::Empty);
    }

    #[test]
    fn paint_refuses_start_and_end() {
        let b = Board::new(2, 1);
        b.place_start(Point::new(0, 0));
        b.place_end(Point::new(1, 0));
        b.paint(Point::new(0, 0), CellState::Visited);
        b.paint(Point::new(1, 0), CellState::Path);
        assert_eq!(b.at(Point::new(0, 0)), CellState::Start);
        assert_eq!(b.at(Point::new(1, 0)), CellState::End);
    }

    #[test]
    fn paint_ignores_out_of_bounds() {
        let b = Board::new(1, 1);
        b.paint(Point::new(5, 5), CellState::Visited);
        b.paint(Point::new(-1, 0), CellState::Visited);
    }

    #[test]
    fn clear_trail_keeps_fixed_cells() {
        let b = Board::parse("@o*\n#o>").unwrap();
        b.clear_trail();
        assert_eq!(b.to_string(), "@..\n#.>");
    }

    #[test]
    fn reads_out_of_bounds_as_empty() {
        let b = Board::parse("#").unwrap();
        assert_eq!(b.at(Point::new(1, 0)), CellState::Empty);
        assert_eq!(b.at(Point::new(0, -1)), CellState::Empty);
    }

    #[test]
    fn walkable_excludes_walls_and_out_of_bounds() {
        let b = Board::parse(".#").unwrap();
        assert!(b.is_walkable(Point::new(0, 0)));
        assert!(!b.is_walkable(Point::new(1, 0)));
        assert!(!b.is_walkable(Point::new(2, 0)));
        assert!(!b.is_walkable(Point::new(0, -1)));
    }

    #[test]
    fn neighbors_in_direction_order() {
        let b = Board::new(3, 3);
        let dirs = DirectionSet::cardinal();
        let n: Vec<_> = b.neighbors(Point::new(1, 1), &dirs).collect();
        assert_eq!(
            n,
            vec![
                Point::new(0, 1),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(1, 2),
            ]
        );
    }

    #[test]
    fn neighbors_clip_to_bounds() {
        let b = Board::new(2, 2);
        let dirs = DirectionSet::cardinal();
        let n: Vec<_> = b.neighbors(Point::new(0, 0), &dirs).collect();
        assert_eq!(n, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn watchers_see_effective_changes_only() {
        let b = Board::new(2, 1);
        let seen: Rc<RefCell<Vec<(Point, CellState)>>> = Rc::default();
        let log = Rc::clone(&seen);
        b.watch(move |p, s| log.borrow_mut().push((p, s)));

        b.set_wall(Point::new(0, 0));
        b.set_wall(Point::new(0, 0)); // no change, no event
        b.erase(Point::new(0, 0));

        assert_eq!(
            &*seen.borrow(),
            &[
                (Point::new(0, 0), CellState::Wall),
                (Point::new(0, 0), CellState::Empty),
            ]
        );
    }

    #[test]
    fn parse_and_display_round_trip() {
        let text = "@.#\n.o>\n***";
        let b = Board::parse(text).unwrap();
        assert_eq!(b.to_string(), text);
        assert_eq!(b.find_start(), Some(Point::new(0, 0)));
        assert_eq!(b.find_end(), Some(Point::new(2, 1)));
    }

    #[test]
    fn parse_rejects_bad_maps() {
        assert_eq!(Board::parse("  ").unwrap_err(), ParseBoardError::Empty);
        assert_eq!(
            Board::parse("..\n...").unwrap_err(),
            ParseBoardError::RaggedLine(1)
        );
        assert_eq!(
            Board::parse(".x").unwrap_err(),
            ParseBoardError::UnknownChar('x')
        );
        assert_eq!(
            Board::parse("@@").unwrap_err(),
            ParseBoardError::DuplicateStart
        );
        assert_eq!(
            Board::parse(">>").unwrap_err(),
            ParseBoardError::DuplicateEnd
        );
    }
}
