use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chessmatch_console::{ConsoleConfig, ConsoleGame, Outcome};

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board on stdout.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = ConsoleConfig::from_env();
    info!(?config, "chessmatch starting");

    let mut game = ConsoleGame::new(config, io::stdin().lock(), io::stdout().lock());
    match game.run().context("console session failed")? {
        Outcome::Checkmate { winner } => info!(%winner, "checkmate"),
        Outcome::Quit => info!("session ended"),
    }
    Ok(())
}
