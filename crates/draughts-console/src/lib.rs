//! Line-oriented text console for playing draughts against the engine.

pub mod command;
pub mod console;
pub mod error;
pub mod session;

pub use command::{Command, ConsoleOption, parse_command};
pub use console::{Console, EngineConfig};
pub use error::ConsoleError;
pub use session::Session;
