//! Advancement bonus for men.
//!
//! A man earns one point per row it stands from its own back edge,
//! counting the back row itself: `row + 1` for White and `8 - row` for
//! Black. Kings are scored by [`material`](super::material) only.

use draughts_core::{Board, Color, Square};

/// Advancement bonus for a man of `color` on `sq` (always positive).
#[inline]
pub fn row_bonus(color: Color, sq: Square) -> i32 {
    let row = i32::from(sq.row());
    match color {
        Color::White => row + 1,
        Color::Black => 8 - row,
    }
}

/// Sum of man advancement bonuses from White's perspective.
pub fn advancement(board: &Board) -> i32 {
    board
        .pieces()
        .filter(|(_, piece)| piece.is_man())
        .map(|(sq, piece)| match piece.color() {
            Color::White => row_bonus(Color::White, sq),
            Color::Black => -row_bonus(Color::Black, sq),
        })
        .sum()
}
