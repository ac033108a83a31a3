//! Perft (move tree leaf count) for move generation regression checks.

use crate::board::Board;
use crate::movegen::{generate_moves, generate_piece_moves};
use crate::square::Square;

/// Count the number of leaf nodes at the given depth.
///
/// The turn passes to the other side after every ply. Depth 0 returns 1
/// (the current position). Depth 1 returns the number of moves.
pub fn perft(board: &Board, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(board);

    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|child| perft(&child.pass_turn(), depth - 1))
        .sum()
}

/// Run perft with a per-origin breakdown (useful for debugging).
///
/// Returns `(origin, node_count)` pairs for every square of the side to
/// move that has at least one move, in square index order.
pub fn divide(board: &Board, depth: usize) -> Vec<(Square, u64)> {
    board
        .squares_of(board.side_to_move())
        .filter_map(|origin| {
            let moves = generate_piece_moves(board, origin);
            if moves.is_empty() {
                return None;
            }
            let count = if depth <= 1 {
                moves.len() as u64
            } else {
                moves
                    .iter()
                    .map(|child| perft(&child.pass_turn(), depth - 1))
                    .sum()
            };
            Some((origin, count))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    #[test]
    fn perft_initial_depth_0() {
        assert_eq!(perft(&Board::initial_state(), 0), 1);
    }

    #[test]
    fn perft_initial_depth_1() {
        assert_eq!(perft(&Board::initial_state(), 1), 7);
    }

    #[test]
    fn perft_initial_depth_2() {
        assert_eq!(perft(&Board::initial_state(), 2), 49);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::initial_state();
        for depth in 1..=3 {
            let total: u64 = divide(&board, depth).iter().map(|(_, n)| n).sum();
            assert_eq!(total, perft(&board, depth), "depth {depth}");
        }
    }

    #[test]
    fn divide_lists_front_row_origins() {
        let board = Board::initial_state();
        let split = divide(&board, 1);
        let origins: Vec<(u8, u8)> = split.iter().map(|(sq, _)| (sq.column(), sq.row())).collect();
        assert_eq!(origins, vec![(1, 2), (3, 2), (5, 2), (7, 2)]);
        let counts: Vec<u64> = split.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![2, 2, 2, 1]);
    }
}
