//! Reversi console: two players sharing one terminal.

mod cli;
mod command;
mod config;
mod session;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{ConsoleConfig, FileConfig};
use session::Session;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = match &cli.config {
        Some(path) => FileConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FileConfig::default(),
    };
    let config = ConsoleConfig::resolve(&cli, file);

    let filter = match &config.log {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter {:?}", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "starting session");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(config);
    session
        .run(stdin.lock(), stdout.lock())
        .context("terminal I/O failed")?;

    info!(
        moves = session.engine().history_len(),
        "session ended"
    );
    Ok(())
}
