//! A game in progress: the current board and the positions before it.

use std::path::Path;

use draughts_core::{Board, Color, Piece, SnapshotError, Square, find_move, snapshot};
use draughts_engine::Searcher;

/// Current board plus an undo history.
///
/// Every board kept in the history is an independent value, so taking a
/// move back simply restores the previous one.
#[derive(Debug, Clone, Default)]
pub struct Session {
    board: Board,
    history: Vec<Board>,
}

impl Session {
    /// Start a game from the initial position.
    pub fn new() -> Self {
        Self::from_board(Board::initial_state())
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of positions that can be taken back.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Play a manual move and hand the turn over.
    ///
    /// Returns `None` and leaves the game untouched if no generated move
    /// from `from` matches the request.
    pub fn play(&mut self, from: Square, to: Square) -> Option<&Board> {
        let next = find_move(&self.board, from, to)?;
        Some(self.advance(next))
    }

    /// Let the engine move for the side on turn and hand the turn over.
    ///
    /// Returns `None` if that side has no legal move.
    pub fn play_engine(&mut self, searcher: &mut Searcher) -> Option<&Board> {
        let next = searcher.next_move(&self.board)?;
        Some(self.advance(next))
    }

    /// Restore the position before the last move. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.board = previous;
                true
            }
            None => false,
        }
    }

    /// View the board from the other side.
    pub fn invert(&mut self) {
        self.board = self.board.inverted();
    }

    /// Cycle the piece on `sq` through empty, white man, white king,
    /// black king, black man. Returns `false` for unplayable squares.
    pub fn cycle_cell(&mut self, sq: Square) -> bool {
        if !sq.is_playable() {
            return false;
        }
        let code = self.board.piece_on(sq).map_or(0, Piece::code);
        let next = (code + 3).rem_euclid(5) - 2;
        self.board = self.board.with_cell(sq, Piece::from_code(next));
        true
    }

    /// Reset to the initial position and forget the history.
    pub fn new_game(&mut self) {
        self.board = Board::initial_state();
        self.history.clear();
    }

    /// Write the current position to `path`.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        snapshot::save(&self.board, path)
    }

    /// Replace the current position with the one stored at `path`.
    ///
    /// The replaced position can be restored with [`undo`](Self::undo).
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let loaded = snapshot::load(path)?;
        self.history.push(self.board);
        self.board = loaded;
        Ok(())
    }

    /// The winner, once one side has no pieces left.
    pub fn outcome(&self) -> Option<Color> {
        self.board.winner()
    }

    fn advance(&mut self, next: Board) -> &Board {
        self.history.push(self.board);
        self.board = next.pass_turn();
        &self.board
    }
}
