//! Board squares and diagonal directions.

use std::fmt;

/// A square on the 8×8 board, encoded as `row * 8 + column`.
///
/// Column and row both run 0..=7. Only squares with an odd
/// `column + row` are playable.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Board side length.
    pub const SIDE: u8 = 8;

    /// Create a square from a column and a row, returning `None` if either is off the board.
    #[inline]
    pub const fn new(column: u8, row: u8) -> Option<Square> {
        if column < Self::SIDE && row < Self::SIDE {
            Some(Square(row * Self::SIDE + column))
        } else {
            None
        }
    }

    /// Create a square from signed coordinates, returning `None` if off the board.
    #[inline]
    pub const fn from_coords(column: i8, row: i8) -> Option<Square> {
        if column < 0 || row < 0 {
            return None;
        }
        Square::new(column as u8, row as u8)
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn column(self) -> u8 {
        self.0 % Self::SIDE
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / Self::SIDE
    }

    /// Return `true` if pieces may ever stand on this square.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.column() + self.row()) % 2 == 1
    }

    /// The square `distance` steps away along `direction`, if it is on the board.
    #[inline]
    pub const fn offset(self, direction: Direction, distance: u8) -> Option<Square> {
        let (dc, dr) = direction.delta();
        let d = distance as i8;
        Square::from_coords(self.column() as i8 + dc * d, self.row() as i8 + dr * d)
    }

    /// The square reached by rotating the board 180°.
    #[inline]
    pub const fn rotated(self) -> Square {
        Square(Self::COUNT as u8 - 1 - self.0)
    }

    /// Iterate over all 64 squares in index order (row 0 first).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }

    /// Iterate over the 32 playable squares in index order.
    pub fn playable() -> impl Iterator<Item = Square> {
        Square::all().filter(|sq| sq.is_playable())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.column(), self.row())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({},{})", self.column(), self.row())
    }
}

/// One of the four diagonal directions, as `(column, row)` deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    DownLeft,
    UpLeft,
    DownRight,
    UpRight,
}

impl Direction {
    /// All directions in exploration order.
    pub const ALL: [Direction; 4] = [
        Direction::DownLeft,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::UpRight,
    ];

    /// Return the `(column, row)` delta of one step.
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::DownLeft => (-1, -1),
            Direction::UpLeft => (-1, 1),
            Direction::DownRight => (1, -1),
            Direction::UpRight => (1, 1),
        }
    }
}
