//! Plain-text snapshot parsing and serialization for [`Board`].
//!
//! Layout: eight grid lines, row 0 first, each holding eight
//! space-separated cell codes in -2..=2, followed by one status line
//! `player white_count black_count` where the player is `1` or `-1`.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::SnapshotError;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Serialize the board as a snapshot string.
    pub fn to_snapshot(&self) -> String {
        self.to_string()
    }
}

impl FromStr for Board {
    type Err = SnapshotError;

    fn from_str(text: &str) -> Result<Board, SnapshotError> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.len() != 9 {
            return Err(SnapshotError::WrongLineCount { found: lines.len() });
        }

        let mut cells = [None; Square::COUNT];
        for (row, line) in lines[..8].iter().enumerate() {
            let codes: Vec<&str> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(SnapshotError::BadRowLength {
                    row,
                    length: codes.len(),
                });
            }
            for (column, code) in codes.iter().enumerate() {
                let invalid = || SnapshotError::InvalidCell {
                    row,
                    column,
                    found: code.to_string(),
                };
                let value: i8 = code.parse().map_err(|_| invalid())?;
                if value != 0 {
                    cells[row * 8 + column] = Some(Piece::from_code(value).ok_or_else(invalid)?);
                }
            }
        }

        let status: Vec<&str> = lines[8].split_whitespace().collect();
        if status.len() != 3 {
            return Err(SnapshotError::WrongStatusFieldCount {
                found: status.len(),
            });
        }

        let side_to_move = status[0]
            .parse::<i8>()
            .ok()
            .and_then(Color::from_sign)
            .ok_or_else(|| SnapshotError::InvalidPlayer {
                found: status[0].to_string(),
            })?;
        let white_count = parse_count(status[1], "white count")?;
        let black_count = parse_count(status[2], "black count")?;

        let board = Board::from_raw(cells, side_to_move, white_count, black_count);
        board.validate()?;
        Ok(board)
    }
}

fn parse_count(token: &str, field: &'static str) -> Result<u8, SnapshotError> {
    token.parse().map_err(|_| SnapshotError::InvalidCount {
        field,
        found: token.to_string(),
    })
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0u8..8 {
            for column in 0u8..8 {
                let code = Square::new(column, row)
                    .and_then(|sq| self.piece_on(sq))
                    .map_or(0, Piece::code);
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{code}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "{} {} {}",
            self.side_to_move().sign(),
            self.white_count(),
            self.black_count()
        )
    }
}

/// Write `board` to `path` as a snapshot, replacing any existing file.
pub fn save(board: &Board, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
    let mut text = board.to_snapshot();
    text.push('\n');
    fs::write(path, text)?;
    Ok(())
}

/// Read a board from the snapshot file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Board, SnapshotError> {
    let text = fs::read_to_string(path)?;
    text.parse()
}

#[cfg(test)]
mod tests {
    use super::{load, save};
    use crate::board::Board;
    use crate::color::Color;
    use crate::error::{BoardError, SnapshotError};
    use crate::piece::Piece;
    use crate::square::Square;

    const INITIAL: &str = "\
0 1 0 1 0 1 0 1
1 0 1 0 1 0 1 0
0 1 0 1 0 1 0 1
0 0 0 0 0 0 0 0
0 0 0 0 0 0 0 0
-1 0 -1 0 -1 0 -1 0
0 -1 0 -1 0 -1 0 -1
-1 0 -1 0 -1 0 -1 0
1 12 12";

    fn roundtrip(board: Board) {
        let text = board.to_snapshot();
        let parsed: Board = text.parse().unwrap();
        assert_eq!(parsed, board, "snapshot roundtrip failed:\n{text}");
    }

    #[test]
    fn initial_state_matches_snapshot() {
        assert_eq!(Board::initial_state().to_snapshot(), INITIAL);
        assert_eq!(INITIAL.parse::<Board>().unwrap(), Board::initial_state());
    }

    #[test]
    fn roundtrip_with_kings_and_black_to_move() {
        let board = Board::empty(Color::Black)
            .with_cell(Square::new(2, 3).unwrap(), Some(Piece::WHITE_KING))
            .with_cell(Square::new(5, 6).unwrap(), Some(Piece::BLACK_KING))
            .with_cell(Square::new(1, 0).unwrap(), Some(Piece::BLACK_MAN));
        roundtrip(board);
    }

    #[test]
    fn tolerates_trailing_spaces_and_newline() {
        let text: String = INITIAL.lines().map(|l| format!("{l} \n")).collect();
        assert_eq!(text.parse::<Board>().unwrap(), Board::initial_state());
    }

    #[test]
    fn error_wrong_line_count() {
        let result = "0 0 0 0 0 0 0 0\n1 0 0".parse::<Board>();
        assert!(matches!(result, Err(SnapshotError::WrongLineCount { found: 2 })));
    }

    #[test]
    fn error_bad_row_length() {
        let text = INITIAL.replacen("0 1 0 1 0 1 0 1", "0 1 0 1 0 1 0", 1);
        assert!(matches!(
            text.parse::<Board>(),
            Err(SnapshotError::BadRowLength { row: 0, length: 7 })
        ));
    }

    #[test]
    fn error_invalid_cell() {
        let text = INITIAL.replacen("0 1 0 1 0 1 0 1", "0 3 0 1 0 1 0 1", 1);
        assert!(matches!(
            text.parse::<Board>(),
            Err(SnapshotError::InvalidCell { row: 0, column: 1, .. })
        ));
        let text = INITIAL.replacen("0 1 0 1 0 1 0 1", "0 x 0 1 0 1 0 1", 1);
        assert!(text.parse::<Board>().is_err());
    }

    #[test]
    fn error_invalid_player() {
        let text = INITIAL.replace("1 12 12", "0 12 12");
        assert!(matches!(
            text.parse::<Board>(),
            Err(SnapshotError::InvalidPlayer { .. })
        ));
    }

    #[test]
    fn error_count_mismatch() {
        let text = INITIAL.replace("1 12 12", "1 12 11");
        assert!(matches!(
            text.parse::<Board>(),
            Err(SnapshotError::InvalidBoard {
                source: BoardError::CountMismatch {
                    color: Color::Black,
                    ..
                }
            })
        ));
    }

    #[test]
    fn error_missing_status_field() {
        let text = INITIAL.replace("1 12 12", "1 12");
        assert!(matches!(
            text.parse::<Board>(),
            Err(SnapshotError::WrongStatusFieldCount { found: 2 })
        ));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("savegame.txt");
        let board = Board::initial_state().pass_turn();
        save(&board, &path).unwrap();
        assert_eq!(load(&path).unwrap(), board);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(SnapshotError::Io { .. })));
    }
}
