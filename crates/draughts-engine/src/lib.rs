//! Evaluation and search for the draughts engine.

pub mod eval;
pub mod search;

pub use eval::evaluate;
pub use search::tie_break::{FirstWins, SeededRandom, TieBreak};
pub use search::{SearchResult, Searcher};
