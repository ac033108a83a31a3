//! Legal move generation.
//!
//! A move is either a single quiet step or a maximal chain of captures
//! started from one square. Generated boards keep the mover on turn.

mod chain;
mod step;

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

pub use self::step::relocate;

/// Generate every board reachable by one full move of the piece on `origin`.
///
/// Returns an empty list when `origin` is empty or holds a piece of the
/// side not on turn.
pub fn generate_piece_moves(board: &Board, origin: Square) -> Vec<Board> {
    match board.piece_on(origin) {
        Some(piece) if piece.color() == board.side_to_move() => {
            let moves = chain::explore(board, origin);
            trace!(origin = %origin, count = moves.len(), "generated piece moves");
            moves
        }
        _ => Vec::new(),
    }
}

/// Generate every board reachable by one full move of the side to move.
///
/// Origins are visited in square index order (row 0 first).
pub fn generate_moves(board: &Board) -> Vec<Board> {
    board
        .squares_of(board.side_to_move())
        .flat_map(|origin| chain::explore(board, origin))
        .collect()
}

/// Resolve a manual move request from `from` to `to`.
///
/// The request is turned into a proposed board by moving the piece
/// directly, then matched against the generated moves from `from`. Only
/// the squares occupied by the mover are compared: captured pieces need
/// not be restated and a piece crowned mid-chain still matches. Returns
/// the first matching generated board.
pub fn find_move(board: &Board, from: Square, to: Square) -> Option<Board> {
    let proposed = relocate(board, from, to)?;
    let mover = board.side_to_move();
    generate_piece_moves(board, from)
        .into_iter()
        .find(|candidate| same_footprint(&proposed, candidate, mover))
}

/// Return `true` if `a` and `b` have pieces of `color` on exactly the same squares.
fn same_footprint(a: &Board, b: &Board, color: Color) -> bool {
    Square::all().all(|sq| a.is_owned_by(sq, color) == b.is_owned_by(sq, color))
}
