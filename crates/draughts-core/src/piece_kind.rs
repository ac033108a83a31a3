//! Draughts piece kinds.

use std::fmt;

/// The kind of a piece, without color information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Man = 1,
    King = 2,
}

impl PieceKind {
    /// Magnitude of the signed cell code (1 for a man, 2 for a king).
    #[inline]
    pub const fn magnitude(self) -> i8 {
        self as i8
    }

    /// Longest diagonal distance this kind considers in a single move.
    ///
    /// A man reaches two squares (a step or a jump); a king reaches the
    /// whole diagonal.
    #[inline]
    pub const fn reach(self) -> u8 {
        match self {
            PieceKind::Man => 2,
            PieceKind::King => 7,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "man"),
            PieceKind::King => write!(f, "king"),
        }
    }
}
