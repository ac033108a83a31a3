//! Console command parsing.

use std::path::PathBuf;

use draughts_core::Square;

use crate::error::ConsoleError;

/// An option changed with `setoption`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOption {
    /// Search depth in plies.
    Depth(u8),
    /// Tie-break seed; `None` selects the deterministic first-wins rule.
    Seed(Option<u64>),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- reset to the starting position.
    New,
    /// `show` -- print the board.
    Show,
    /// `move <c> <r> <c> <r>` -- play a manual move.
    Move {
        /// Square the piece starts on.
        from: Square,
        /// Square the piece should end on.
        to: Square,
    },
    /// `go` -- let the engine move for the side on turn.
    Go,
    /// `undo` -- take back the last move.
    Undo,
    /// `flip` -- view the board from the other side.
    Flip,
    /// `edit <c> <r>` -- cycle the piece on a square.
    Edit(Square),
    /// `save <path>` -- write a snapshot.
    Save(PathBuf),
    /// `load <path>` -- read a snapshot.
    Load(PathBuf),
    /// `setoption <name> <value>` -- change engine configuration.
    SetOption(ConsoleOption),
    /// `quit` -- exit the console.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of console input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "show" => Ok(Command::Show),
        "go" => Ok(Command::Go),
        "undo" => Ok(Command::Undo),
        "flip" => Ok(Command::Flip),
        "quit" => Ok(Command::Quit),
        "move" => parse_move(&tokens[1..]),
        "edit" => Ok(Command::Edit(parse_square(&tokens[1..], "edit")?)),
        "save" => Ok(Command::Save(parse_path(&tokens[1..], "save")?)),
        "load" => Ok(Command::Load(parse_path(&tokens[1..], "load")?)),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `move` arguments: two coordinate pairs.
fn parse_move(tokens: &[&str]) -> Result<Command, ConsoleError> {
    if tokens.len() < 4 {
        return Err(ConsoleError::MissingArgument { command: "move" });
    }
    let from = parse_square(&tokens[..2], "move")?;
    let to = parse_square(&tokens[2..4], "move")?;
    Ok(Command::Move { from, to })
}

/// Parse a `<column> <row>` pair from the front of `tokens`.
fn parse_square(tokens: &[&str], command: &'static str) -> Result<Square, ConsoleError> {
    let (Some(column), Some(row)) = (tokens.first(), tokens.get(1)) else {
        return Err(ConsoleError::MissingArgument { command });
    };
    let invalid = || ConsoleError::InvalidSquare {
        column: column.to_string(),
        row: row.to_string(),
    };
    let c: u8 = column.parse().map_err(|_| invalid())?;
    let r: u8 = row.parse().map_err(|_| invalid())?;
    Square::new(c, r).ok_or_else(invalid)
}

/// Parse a path argument. The rest of the line is taken as the path.
fn parse_path(tokens: &[&str], command: &'static str) -> Result<PathBuf, ConsoleError> {
    if tokens.is_empty() {
        return Err(ConsoleError::MissingArgument { command });
    }
    Ok(PathBuf::from(tokens.join(" ")))
}

/// Parse `setoption` arguments.
///
/// Supports `depth <n>` and `seed <n|none>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ConsoleError> {
    let Some(&name) = tokens.first() else {
        return Err(ConsoleError::MissingArgument {
            command: "setoption",
        });
    };
    let value = tokens.get(1).ok_or(ConsoleError::MissingArgument {
        command: "setoption",
    })?;

    match name {
        "depth" => {
            let depth = value.parse().map_err(|_| ConsoleError::InvalidOptionValue {
                name: "depth",
                value: value.to_string(),
            })?;
            Ok(Command::SetOption(ConsoleOption::Depth(depth)))
        }
        "seed" => {
            let seed = if *value == "none" {
                None
            } else {
                Some(value.parse().map_err(|_| ConsoleError::InvalidOptionValue {
                    name: "seed",
                    value: value.to_string(),
                })?)
            };
            Ok(Command::SetOption(ConsoleOption::Seed(seed)))
        }
        other => Err(ConsoleError::UnknownOption {
            name: other.to_string(),
        }),
    }
}
