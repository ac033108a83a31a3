//! Static position evaluation.
//!
//! Scores are from White's perspective: positive favors White, negative
//! favors Black.

pub mod advancement;
pub mod material;

use draughts_core::Board;

/// Evaluate `board` from White's perspective.
///
/// The sum of [`material::material`] and [`advancement::advancement`].
pub fn evaluate(board: &Board) -> i32 {
    material::material(board) + advancement::advancement(board)
}
