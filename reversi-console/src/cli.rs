//! Command-line interface for the reversi console.

use clap::Parser;
use std::path::PathBuf;

/// Play Othello in the terminal.
#[derive(Parser, Debug, Default)]
#[command(name = "reversi")]
#[command(about = "Two-player Othello on one terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML file with display and logging settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Draw pieces with ASCII characters instead of Unicode discs
    #[arg(long)]
    pub ascii: bool,

    /// Hide the A-H / 1-8 labels around the board
    #[arg(long)]
    pub no_coordinates: bool,

    /// Log filter directive, e.g. "reversi_engine=debug"
    #[arg(long)]
    pub log: Option<String>,
}
