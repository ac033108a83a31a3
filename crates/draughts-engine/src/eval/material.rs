//! Material balance evaluation.
//!
//! Every piece is worth [`PIECE_VALUE`]; kings add [`KING_BONUS`] on top.
//! All scores are returned from White's perspective.

use draughts_core::{Board, Color};

/// Value of any piece, man or king.
pub const PIECE_VALUE: i32 = 10;

/// Flat bonus for each king.
pub const KING_BONUS: i32 = 8;

/// Evaluate material balance from White's perspective.
pub fn material(board: &Board) -> i32 {
    let mut score = (i32::from(board.white_count()) - i32::from(board.black_count())) * PIECE_VALUE;

    for (_, piece) in board.pieces() {
        if piece.is_king() {
            score += match piece.color() {
                Color::White => KING_BONUS,
                Color::Black => -KING_BONUS,
            };
        }
    }

    score
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
