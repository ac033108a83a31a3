//! Fixed-depth move search.

pub mod minimax;
pub mod tie_break;

use draughts_core::{Board, generate_moves};
use tracing::debug;

use minimax::{SearchContext, minimax};
use tie_break::{FirstWins, TieBreak};

/// Result of a completed search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Position after the chosen move. The mover is still on turn.
    pub board: Board,
    /// Minimax score of the chosen move from White's perspective.
    pub score: i32,
    /// Total nodes visited during the search.
    pub nodes: u64,
    /// Depth searched.
    pub depth: u8,
}

/// Depth-limited minimax searcher with a pluggable tie-break.
pub struct Searcher {
    depth: u8,
    tie_break: Box<dyn TieBreak + Send>,
}

impl Searcher {
    /// Search depth used by [`Searcher::default`].
    pub const DEFAULT_DEPTH: u8 = 4;

    /// Create a searcher that keeps the first of equally scored moves.
    ///
    /// A depth of 0 is raised to 1.
    pub fn new(depth: u8) -> Self {
        Self::with_tie_break(depth, FirstWins)
    }

    /// Create a searcher with an explicit tie-break strategy.
    pub fn with_tie_break(depth: u8, tie_break: impl TieBreak + Send + 'static) -> Self {
        Self {
            depth: depth.max(1),
            tie_break: Box::new(tie_break),
        }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Change the search depth. A depth of 0 is raised to 1.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth.max(1);
    }

    /// Replace the tie-break strategy.
    pub fn set_tie_break(&mut self, tie_break: impl TieBreak + Send + 'static) {
        self.tie_break = Box::new(tie_break);
    }

    /// Pick the engine's move for the side to move on `board`.
    ///
    /// Returns `None` when that side has no legal move.
    pub fn next_move(&mut self, board: &Board) -> Option<Board> {
        self.search(board).map(|result| result.board)
    }

    /// Run the search and report the chosen move with its score.
    ///
    /// Returns `None` when the side to move has no legal move.
    pub fn search(&mut self, board: &Board) -> Option<SearchResult> {
        if generate_moves(board).is_empty() {
            debug!(side = %board.side_to_move(), "no legal move");
            return None;
        }

        let mut ctx = SearchContext {
            depth: self.depth,
            root_side: board.side_to_move(),
            nodes: 0,
            tie_break: &mut *self.tie_break,
        };
        let scored = minimax(board, 0, &mut ctx);
        let nodes = ctx.nodes;

        debug!(depth = self.depth, score = scored.score, nodes, "search finished");

        scored.board.map(|chosen| SearchResult {
            board: chosen,
            score: scored.score,
            nodes,
            depth: self.depth,
        })
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH)
    }
}
