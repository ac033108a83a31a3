//! Plain depth-limited minimax.

use draughts_core::{Board, Color, generate_moves};

use crate::evaluate;
use crate::search::tie_break::TieBreak;

/// Magnitude of the score given to an inner node with no moves.
///
/// A maximizing node without moves scores `-NO_MOVE_SCORE`, a minimizing
/// one `+NO_MOVE_SCORE`.
pub const NO_MOVE_SCORE: i32 = 1_000;

/// Per-search state threaded through the recursion.
pub(super) struct SearchContext<'a> {
    /// Ply at which nodes are scored statically.
    pub depth: u8,
    /// Side to move at the root; decides which plies maximize.
    pub root_side: Color,
    pub nodes: u64,
    pub tie_break: &'a mut dyn TieBreak,
}

/// Best child of a node and its backed-up score.
pub(super) struct Scored {
    /// `None` at leaves and at nodes without moves.
    pub board: Option<Board>,
    pub score: i32,
}

/// Score `board` at `ply` and pick its best child.
///
/// Even plies maximize when White is the root side and odd plies maximize
/// when Black is. Generated children keep the mover on turn, so every ply
/// expands moves of the root side; the opponent never replies inside the
/// tree.
// TODO: alternate the expanded side once the intended turn order is confirmed;
// switching it changes which moves the engine plays.
pub(super) fn minimax(board: &Board, ply: u8, ctx: &mut SearchContext<'_>) -> Scored {
    ctx.nodes += 1;

    if ply >= ctx.depth {
        return Scored {
            board: None,
            score: evaluate(board),
        };
    }

    let maximizing = (ctx.root_side == Color::White) == (ply % 2 == 0);
    let mut best: Option<(Board, i32)> = None;

    for child in generate_moves(board) {
        let score = minimax(&child, ply + 1, ctx).score;
        let replace = match best {
            None => true,
            Some((_, best_score)) if score == best_score => ctx.tie_break.prefer_candidate(),
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if replace {
            best = Some((child, score));
        }
    }

    match best {
        Some((child, score)) => Scored {
            board: Some(child),
            score,
        },
        None => Scored {
            board: None,
            score: if maximizing { -NO_MOVE_SCORE } else { NO_MOVE_SCORE },
        },
    }
}
