use std::io;

use anyhow::Result;
use tracing::info;

use draughts_console::Console;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("draughts starting");
    Console::new().run(io::stdin().lock(), io::stdout().lock())?;
    Ok(())
}
