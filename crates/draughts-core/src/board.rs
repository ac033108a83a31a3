//! The draughts board: piece placement, side to move, and piece counts.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::square::Square;

/// Complete draughts position state.
///
/// A `Board` is a plain value. Move generation copies it and edits the
/// copy, so a board handed to a caller is never changed afterwards and can
/// be kept in a history indefinitely.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cell contents indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// Number of pieces per side, indexed by [`Color::index()`].
    counts: [u8; Color::COUNT],
}

impl Board {
    /// Return the standard starting position.
    ///
    /// White men fill the playable squares of rows 0–2, Black men those of
    /// rows 5–7. White moves first.
    pub fn initial_state() -> Board {
        let mut cells = [None; Square::COUNT];
        for sq in Square::playable() {
            match sq.row() {
                0..=2 => cells[sq.index()] = Some(Piece::WHITE_MAN),
                5..=7 => cells[sq.index()] = Some(Piece::BLACK_MAN),
                _ => {}
            }
        }
        Board::from_cells(cells, Color::White)
    }

    /// Return a board with no pieces.
    pub fn empty(side_to_move: Color) -> Board {
        Board {
            cells: [None; Square::COUNT],
            side_to_move,
            counts: [0; Color::COUNT],
        }
    }

    /// Build a board from a cell grid, deriving the piece counts from it.
    pub fn from_cells(cells: [Option<Piece>; Square::COUNT], side_to_move: Color) -> Board {
        let mut board = Board {
            cells,
            side_to_move,
            counts: [0; Color::COUNT],
        };
        board.counts = board.recount();
        board
    }

    /// Construct a board from raw parts without validation.
    pub(crate) fn from_raw(
        cells: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        white_count: u8,
        black_count: u8,
    ) -> Board {
        Board {
            cells,
            side_to_move,
            counts: [white_count, black_count],
        }
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return the color of the piece on `sq`, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Return `true` if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_owned_by(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) == Some(color)
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of pieces `color` has left.
    #[inline]
    pub fn count(&self, color: Color) -> u8 {
        self.counts[color.index()]
    }

    #[inline]
    pub fn white_count(&self) -> u8 {
        self.count(Color::White)
    }

    #[inline]
    pub fn black_count(&self) -> u8 {
        self.count(Color::Black)
    }

    /// Iterate over the squares holding a piece of `color`, row 0 first.
    pub fn squares_of(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&sq| self.is_owned_by(sq, color))
    }

    /// Iterate over every occupied square together with its piece.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Return the same position with `color` to move.
    #[inline]
    pub fn with_side_to_move(mut self, color: Color) -> Board {
        self.side_to_move = color;
        self
    }

    /// Return the same position with the other side to move.
    ///
    /// Move generation leaves the mover on turn; the caller hands the turn
    /// over once it accepts a move.
    #[inline]
    pub fn pass_turn(self) -> Board {
        let side = self.side_to_move.flip();
        self.with_side_to_move(side)
    }

    /// Return a copy with `sq` set to `piece`, keeping the counts in sync.
    pub fn with_cell(mut self, sq: Square, piece: Option<Piece>) -> Board {
        self.set(sq, piece);
        self
    }

    /// View the position from the other side.
    ///
    /// Rotates the grid 180°, hands every piece to the other side, swaps the
    /// counts, and flips the side to move. This is an orientation transform
    /// with no rule effect.
    pub fn inverted(&self) -> Board {
        let mut cells = [None; Square::COUNT];
        for (sq, piece) in self.pieces() {
            cells[sq.rotated().index()] = Some(piece.flipped());
        }
        Board {
            cells,
            side_to_move: self.side_to_move.flip(),
            counts: [self.black_count(), self.white_count()],
        }
    }

    /// Return `true` once either side has no pieces left.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.white_count() == 0 || self.black_count() == 0
    }

    /// Return the side whose opponent has no pieces left, if any.
    pub fn winner(&self) -> Option<Color> {
        if self.black_count() == 0 {
            Some(Color::White)
        } else if self.white_count() == 0 {
            Some(Color::Black)
        } else {
            None
        }
    }

    /// Validate the structural invariants of this board.
    ///
    /// Checks:
    /// - Every piece stands on a playable square.
    /// - Each stored count equals the number of that side's pieces on the grid.
    pub fn validate(&self) -> Result<(), BoardError> {
        if let Some((square, _)) = self.pieces().find(|(sq, _)| !sq.is_playable()) {
            return Err(BoardError::UnplayableSquare { square });
        }

        let actual = self.recount();
        for color in Color::ALL {
            if actual[color.index()] != self.count(color) {
                return Err(BoardError::CountMismatch {
                    color,
                    stored: self.count(color),
                    actual: actual[color.index()],
                });
            }
        }
        Ok(())
    }

    /// Return a wrapper that displays this board as an 8×8 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }

    /// Put `piece` on `sq`, adjusting counts for whatever was there before.
    pub(crate) fn set(&mut self, sq: Square, piece: Option<Piece>) {
        if let Some(old) = self.cells[sq.index()] {
            self.counts[old.color().index()] -= 1;
        }
        if let Some(new) = piece {
            self.counts[new.color().index()] += 1;
        }
        self.cells[sq.index()] = piece;
    }

    /// Remove and return the piece on `sq`.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.piece_on(sq);
        self.set(sq, None);
        piece
    }

    fn recount(&self) -> [u8; Color::COUNT] {
        let mut counts = [0u8; Color::COUNT];
        for (_, piece) in self.pieces() {
            counts[piece.color().index()] += 1;
        }
        counts
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial_state()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\n{}\n)", self)
    }
}

/// Wrapper for pretty-printing a board as an 8×8 grid.
///
/// Row 7 is printed first. `w`/`b` are men, `W`/`B` kings, `.` a playable
/// empty square and a blank an unplayable one.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for row in (0u8..8).rev() {
            write!(f, "{row}  ")?;
            for column in 0u8..8 {
                let Some(sq) = Square::new(column, row) else {
                    continue;
                };
                let c = match board.piece_on(sq) {
                    Some(piece) => piece.symbol(),
                    None if sq.is_playable() => '.',
                    None => ' ',
                };
                if column < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   0 1 2 3 4 5 6 7   {} to move", board.side_to_move())
    }
}
