//! Colored draughts piece, stored as a signed magnitude.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored piece, stored as its signed cell code.
///
/// Code layout:
/// - magnitude: [`PieceKind`] (1 = man, 2 = king)
/// - sign: [`Color`] (positive = White, negative = Black)
///
/// Valid raw values are -2, -1, 1 and 2. An empty square is `None` at the
/// board level and code 0 in snapshots.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(i8);

impl Piece {
    /// White man. Raw value: 1.
    pub const WHITE_MAN: Piece = Piece::new(PieceKind::Man, Color::White);
    /// White king. Raw value: 2.
    pub const WHITE_KING: Piece = Piece::new(PieceKind::King, Color::White);
    /// Black man. Raw value: -1.
    pub const BLACK_MAN: Piece = Piece::new(PieceKind::Man, Color::Black);
    /// Black king. Raw value: -2.
    pub const BLACK_KING: Piece = Piece::new(PieceKind::King, Color::Black);

    /// Create a piece from a kind and a color.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece(kind.magnitude() * color.sign())
    }

    /// Decode a non-zero cell code. Returns `None` for 0 and for magnitudes above 2.
    #[inline]
    pub const fn from_code(code: i8) -> Option<Piece> {
        match code {
            -2 | -1 | 1 | 2 => Some(Piece(code)),
            _ => None,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        match self.0 {
            1 | -1 => PieceKind::Man,
            _ => PieceKind::King,
        }
    }

    /// Return the owning color.
    #[inline]
    pub const fn color(self) -> Color {
        if self.0 > 0 { Color::White } else { Color::Black }
    }

    /// Return the signed cell code.
    #[inline]
    pub const fn code(self) -> i8 {
        self.0
    }

    #[inline]
    pub const fn is_man(self) -> bool {
        matches!(self.kind(), PieceKind::Man)
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// The same piece crowned. Kings are returned unchanged.
    #[inline]
    pub const fn crowned(self) -> Piece {
        Piece::new(PieceKind::King, self.color())
    }

    /// The same kind owned by the other side.
    #[inline]
    pub const fn flipped(self) -> Piece {
        Piece(-self.0)
    }

    /// Character used by the pretty board: `w`/`b` for men, `W`/`B` for kings.
    #[inline]
    pub const fn symbol(self) -> char {
        match self.0 {
            1 => 'w',
            2 => 'W',
            -1 => 'b',
            _ => 'B',
        }
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Piece({} {})", self.color(), self.kind())
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn codes_match_signed_magnitude() {
        assert_eq!(Piece::WHITE_MAN.code(), 1);
        assert_eq!(Piece::WHITE_KING.code(), 2);
        assert_eq!(Piece::BLACK_MAN.code(), -1);
        assert_eq!(Piece::BLACK_KING.code(), -2);
    }

    #[test]
    fn from_code_rejects_empty_and_out_of_range() {
        assert_eq!(Piece::from_code(0), None);
        assert_eq!(Piece::from_code(3), None);
        assert_eq!(Piece::from_code(-3), None);
        for code in [-2, -1, 1, 2] {
            assert_eq!(Piece::from_code(code).map(Piece::code), Some(code));
        }
    }

    #[test]
    fn kind_and_color() {
        let piece = Piece::new(PieceKind::King, Color::Black);
        assert_eq!(piece.kind(), PieceKind::King);
        assert_eq!(piece.color(), Color::Black);
        assert!(piece.is_king());
        assert!(!piece.is_man());
    }

    #[test]
    fn crowning_keeps_color() {
        assert_eq!(Piece::WHITE_MAN.crowned(), Piece::WHITE_KING);
        assert_eq!(Piece::BLACK_MAN.crowned(), Piece::BLACK_KING);
        assert_eq!(Piece::BLACK_KING.crowned(), Piece::BLACK_KING);
    }

    #[test]
    fn flipped_swaps_owner() {
        assert_eq!(Piece::WHITE_MAN.flipped(), Piece::BLACK_MAN);
        assert_eq!(Piece::BLACK_KING.flipped(), Piece::WHITE_KING);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Piece::WHITE_MAN), "w");
        assert_eq!(format!("{}", Piece::BLACK_KING), "B");
    }
}
