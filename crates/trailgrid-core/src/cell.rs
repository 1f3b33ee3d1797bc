//! The [`CellState`] classification of a single board cell.

use std::fmt;

/// What a board cell currently holds.
///
/// `Start`, `End` and `Wall` are user-placed and never overwritten by a
/// search; `Visited` and `Path` are transient marks written while a search
/// runs and erased by a reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    Empty,
    Start,
    End,
    Wall,
    Visited,
    Path,
}

impl CellState {
    /// Whether this cell blocks movement.
    #[inline]
    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    /// Whether this cell was placed by the user and must survive both
    /// searches and resets (`Start`, `End` or `Wall`).
    #[inline]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Wall)
    }

    /// The single map character used by [`Board::parse`] and the board's
    /// `Display` impl.
    ///
    /// [`Board::parse`]: crate::Board::parse
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Start => '@',
            Self::End => '>',
            Self::Wall => '#',
            Self::Visited => 'o',
            Self::Path => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char). Returns `None` for characters
    /// that are not a map character.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            '@' => Some(Self::Start),
            '>' => Some(Self::End),
            '#' => Some(Self::Wall),
            'o' => Some(Self::Visited),
            '*' => Some(Self::Path),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
