//! Single-threaded command loop driving a [`Session`] and the engine.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use draughts_engine::{FirstWins, Searcher, SeededRandom};

use crate::command::{Command, ConsoleOption, parse_command};
use crate::error::ConsoleError;
use crate::session::Session;

/// Configuration knobs adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Search depth in plies.
    pub depth: u8,
    /// Tie-break seed. `None` keeps the first of equally scored moves.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: Searcher::DEFAULT_DEPTH,
            seed: None,
        }
    }
}

impl EngineConfig {
    fn searcher(&self) -> Searcher {
        match self.seed {
            Some(seed) => Searcher::with_tie_break(self.depth, SeededRandom::new(seed)),
            None => Searcher::new(self.depth),
        }
    }
}

enum Flow {
    Continue,
    Stop,
}

/// The text console, holding the game session and the engine.
pub struct Console {
    session: Session,
    searcher: Searcher,
    config: EngineConfig,
}

impl Console {
    /// Create a console with the starting position and default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            session: Session::new(),
            searcher: config.searcher(),
            config,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active engine configuration.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Run the command loop until `quit`, the end of the game, or end of input.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), ConsoleError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received console command");

            let flow = match parse_command(trimmed) {
                Ok(cmd) => self.dispatch(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "console parse error");
                    writeln!(output, "error {e}")?;
                    Flow::Continue
                }
            };
            output.flush()?;
            if let Flow::Stop = flow {
                break;
            }
        }

        info!("draughts shutting down");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, output: &mut W) -> Result<Flow, ConsoleError> {
        match cmd {
            Command::New => {
                self.session.new_game();
                return self.show_position(output);
            }
            Command::Show => self.show(output)?,
            Command::Move { from, to } => {
                if self.session.play(from, to).is_none() {
                    warn!(%from, %to, "illegal move");
                    writeln!(output, "illegal move")?;
                    return Ok(Flow::Continue);
                }
                return self.show_position(output);
            }
            Command::Go => {
                if self.session.play_engine(&mut self.searcher).is_none() {
                    writeln!(output, "no move")?;
                    return Ok(Flow::Continue);
                }
                return self.show_position(output);
            }
            Command::Undo => {
                if !self.session.undo() {
                    warn!("nothing to undo");
                }
                return self.show_position(output);
            }
            Command::Flip => {
                self.session.invert();
                return self.show_position(output);
            }
            Command::Edit(sq) => {
                self.session.cycle_cell(sq);
                return self.show_position(output);
            }
            Command::Save(path) => match self.session.save(&path) {
                Ok(()) => writeln!(output, "ok")?,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "save failed");
                    writeln!(output, "error {e}")?;
                }
            },
            Command::Load(path) => match self.session.load(&path) {
                Ok(()) => return self.show_position(output),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "load failed");
                    writeln!(output, "error {e}")?;
                }
            },
            Command::SetOption(option) => {
                self.handle_setoption(option);
                writeln!(output, "ok")?;
            }
            Command::Quit => return Ok(Flow::Stop),
            Command::Unknown(name) => {
                if !name.is_empty() {
                    warn!(command = %name, "unknown command");
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn handle_setoption(&mut self, option: ConsoleOption) {
        match option {
            ConsoleOption::Depth(depth) => {
                self.searcher.set_depth(depth);
                self.config.depth = self.searcher.depth();
            }
            ConsoleOption::Seed(Some(seed)) => {
                self.searcher.set_tie_break(SeededRandom::new(seed));
                self.config.seed = Some(seed);
            }
            ConsoleOption::Seed(None) => {
                self.searcher.set_tie_break(FirstWins);
                self.config.seed = None;
            }
        }
        debug!(depth = self.config.depth, seed = ?self.config.seed, "engine configured");
    }

    fn show<W: Write>(&self, output: &mut W) -> Result<(), ConsoleError> {
        writeln!(output, "{}", self.session.board().pretty())?;
        Ok(())
    }

    /// Print the board after it changed and stop if the game is over.
    fn show_position<W: Write>(&self, output: &mut W) -> Result<Flow, ConsoleError> {
        self.show(output)?;
        self.check_finished(output)
    }

    fn check_finished<W: Write>(&self, output: &mut W) -> Result<Flow, ConsoleError> {
        match self.session.outcome() {
            Some(winner) => {
                info!(%winner, "game finished");
                writeln!(output, "winner {winner}")?;
                Ok(Flow::Stop)
            }
            None => Ok(Flow::Continue),
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
