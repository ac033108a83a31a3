//! Core draughts types: board representation, move generation, and game rules.

mod board;
mod color;
mod error;
mod piece;
mod piece_kind;
mod square;

pub mod movegen;
pub mod perft;
pub mod snapshot;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, SnapshotError};
pub use movegen::{find_move, generate_moves, generate_piece_moves, relocate};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::{Direction, Square};
