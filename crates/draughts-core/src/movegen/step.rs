//! Single diagonal moves: relocation, path capture, and promotion.

use crate::board::Board;
use crate::square::{Direction, Square};

/// Result of one diagonal move, before any chaining.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MoveOutcome {
    /// Position after the move. The mover keeps the turn.
    pub board: Board,
    /// Opponent pieces removed from the path.
    pub captured: u8,
    /// Square the piece landed on.
    pub landing: Square,
}

/// Pick up the piece on `from` and drop it on `to`.
///
/// Returns `None` when `from` is empty, `to` equals `from`, `to` is
/// unplayable or occupied, or a man would step one row backward. A man
/// landing on its promotion row is crowned. Nothing between the two
/// squares is inspected and `to` need not share a diagonal with `from`.
pub fn relocate(board: &Board, from: Square, to: Square) -> Option<Board> {
    if from == to || !to.is_playable() || board.piece_on(to).is_some() {
        return None;
    }

    let piece = board.piece_on(from)?;
    let color = piece.color();
    if piece.is_man() && i16::from(to.row()) == i16::from(from.row()) - i16::from(color.forward()) {
        return None;
    }

    let landed = if piece.is_man() && to.row() == color.promotion_row() {
        piece.crowned()
    } else {
        piece
    };

    let mut result = *board;
    result.take(from);
    result.set(to, Some(landed));
    Some(result)
}

/// Move the piece on `from` `distance` squares along `direction`.
///
/// Every opponent piece strictly between the endpoints is captured. A
/// friendly piece anywhere on the path rejects the move.
pub(crate) fn diagonal_move(
    board: &Board,
    from: Square,
    direction: Direction,
    distance: u8,
) -> Option<MoveOutcome> {
    let to = from.offset(direction, distance)?;
    let mover = board.piece_on(from)?.color();
    let mut result = relocate(board, from, to)?;

    let mut captured = 0u8;
    for step in 1..distance {
        let sq = from.offset(direction, step)?;
        match board.color_on(sq) {
            Some(color) if color == mover => return None,
            Some(_) => {
                result.take(sq);
                captured += 1;
            }
            None => {}
        }
    }

    Some(MoveOutcome {
        board: result,
        captured,
        landing: to,
    })
}
