//! Parsing user input into [`Command`]s.

use derive_more::{Display, Error};
use reversi_engine::Location;

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Place(Location),
    NewGame,
    Skip,
    Undo,
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
#[display(fmt = "unrecognized command: {:?}", input)]
pub struct ParseCommandError {
    pub input: String,
}

impl std::str::FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let command = match trimmed.to_ascii_lowercase().as_str() {
            "new" | "reset" => Command::NewGame,
            "skip" | "pass" => Command::Skip,
            "undo" => Command::Undo,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => other.parse::<Location>().map(Command::Place).map_err(|_| ParseCommandError {
                input: trimmed.to_string(),
            })?,
        };
        Ok(command)
    }
}
