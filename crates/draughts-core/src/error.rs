//! Error types for snapshot parsing and board validation.

use crate::color::Color;
use crate::square::Square;

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A stored piece count disagrees with the pieces on the grid.
    #[error("{color} count is {stored} but the grid holds {actual} {color} pieces")]
    CountMismatch {
        /// Which side has the wrong count.
        color: Color,
        /// The count stored on the board.
        stored: u8,
        /// The number of pieces actually on the grid.
        actual: u8,
    },
    /// A piece stands on a square where `column + row` is even.
    #[error("piece on unplayable square {square}")]
    UnplayableSquare {
        /// The offending square.
        square: Square,
    },
}

/// Errors that occur when reading or writing a board snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The snapshot does not have 8 grid lines plus a status line.
    #[error("expected 9 snapshot lines, found {found}")]
    WrongLineCount {
        /// Number of non-empty lines found.
        found: usize,
    },
    /// A grid line does not hold exactly 8 cells.
    #[error("row {row} holds {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        length: usize,
    },
    /// A cell is not an integer in -2..=2.
    #[error("invalid cell at column {column}, row {row}: \"{found}\"")]
    InvalidCell {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The text that failed to parse.
        found: String,
    },
    /// The status line does not hold exactly three fields.
    #[error("expected 3 status fields, found {found}")]
    WrongStatusFieldCount {
        /// Number of fields found.
        found: usize,
    },
    /// The player code is not `1` or `-1`.
    #[error("invalid current player: \"{found}\"")]
    InvalidPlayer {
        /// The text that failed to parse.
        found: String,
    },
    /// A piece count is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidCount {
        /// Which count ("white count" or "black count").
        field: &'static str,
        /// The text that failed to parse.
        found: String,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
    /// Reading or writing the snapshot file failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, SnapshotError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::CountMismatch {
            color: Color::White,
            stored: 12,
            actual: 11,
        };
        assert_eq!(
            format!("{err}"),
            "white count is 12 but the grid holds 11 white pieces"
        );
        let err = BoardError::UnplayableSquare {
            square: Square::new(0, 0).unwrap(),
        };
        assert_eq!(format!("{err}"), "piece on unplayable square (0,0)");
    }

    #[test]
    fn snapshot_error_display() {
        let err = SnapshotError::WrongLineCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 9 snapshot lines, found 4");
    }

    #[test]
    fn snapshot_error_from_board_error() {
        let board_err = BoardError::UnplayableSquare {
            square: Square::new(2, 2).unwrap(),
        };
        let err: SnapshotError = board_err.into();
        assert!(matches!(err, SnapshotError::InvalidBoard { .. }));
    }
}
