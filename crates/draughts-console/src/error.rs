//! Console protocol errors.

use draughts_core::SnapshotError;

/// Errors that can occur while reading or executing console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// A command is missing one of its arguments.
    #[error("missing argument for {command}")]
    MissingArgument {
        /// The command that was cut short.
        command: &'static str,
    },

    /// A coordinate pair does not name a square on the board.
    #[error("invalid square: {column} {row}")]
    InvalidSquare {
        /// The column token.
        column: String,
        /// The row token.
        row: String,
    },

    /// `setoption` named an option the console does not know.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// An option value could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// Saving or loading a snapshot failed.
    #[error("snapshot error: {source}")]
    Snapshot {
        /// The underlying snapshot error.
        #[from]
        source: SnapshotError,
    },

    /// An I/O error occurred on the console streams.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
