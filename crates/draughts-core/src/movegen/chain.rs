//! Breadth-first exploration of simple steps and capture chains from one square.

use std::collections::VecDeque;

use crate::board::Board;
use crate::movegen::step::diagonal_move;
use crate::square::{Direction, Square};

/// A position waiting to be expanded.
struct Node {
    board: Board,
    square: Square,
    /// `true` only for the position before the piece has moved.
    origin: bool,
}

/// Collect every board reachable by one full move of the piece on `origin`.
///
/// Non-capturing moves are kept only from the origin node. Each capture
/// queues its landing square for further captures; a queued node with no
/// capture of its own is the end of a chain and is emitted as a result.
/// The queue keeps stack usage flat however long a king's chain runs.
pub(crate) fn explore(board: &Board, origin: Square) -> Vec<Board> {
    let mut results = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(Node {
        board: *board,
        square: origin,
        origin: true,
    });

    while let Some(node) = queue.pop_front() {
        // The piece may have been crowned on the previous capture.
        let Some(piece) = node.board.piece_on(node.square) else {
            continue;
        };

        let mut extended = false;
        for distance in 1..=piece.kind().reach() {
            for direction in Direction::ALL {
                let Some(outcome) = diagonal_move(&node.board, node.square, direction, distance)
                else {
                    continue;
                };

                if outcome.captured == 0 {
                    if piece.is_man() && distance > 1 {
                        continue;
                    }
                    if node.origin {
                        results.push(outcome.board);
                    }
                } else {
                    queue.push_back(Node {
                        board: outcome.board,
                        square: outcome.landing,
                        origin: false,
                    });
                    extended = true;
                }
            }
        }

        if !node.origin && !extended {
            results.push(node.board);
        }
    }

    results
}
