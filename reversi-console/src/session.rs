//! One game at the terminal: apply commands, describe what happened, redraw.

use crate::command::Command;
use crate::config::ConsoleConfig;
use reversi_engine::appearance::{self, NEW_GAME_LABEL, SKIP_LABEL, UNDO_LABEL};
use reversi_engine::{Engine, Placement, Rejection};
use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// What a command did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub message: Option<String>,
    pub quit: bool,
}

impl Outcome {
    fn quiet() -> Self {
        Self {
            message: None,
            quit: false,
        }
    }

    fn say(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            quit: false,
        }
    }
}

pub struct Session {
    engine: Engine,
    config: ConsoleConfig,
}

impl Session {
    pub fn new(config: ConsoleConfig) -> Self {
        Self {
            engine: Engine::new(),
            config,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn handle(&mut self, command: Command) -> Outcome {
        debug!(?command, "handling command");
        match command {
            Command::Place(loc) => match self.engine.attempt_place(loc) {
                Placement::Applied { flipped } => {
                    Outcome::say(format!("{} flipped {}", loc, flipped))
                }
                Placement::Rejected(Rejection::Occupied) => {
                    Outcome::say(format!("Illegal move: {} is occupied", loc))
                }
                Placement::Rejected(Rejection::NoCapture) => {
                    Outcome::say(format!("Illegal move: {} captures nothing", loc))
                }
            },
            Command::NewGame => {
                self.engine.reset();
                Outcome::quiet()
            }
            Command::Skip => {
                self.engine.skip_turn();
                Outcome::quiet()
            }
            Command::Undo => {
                if self.engine.undo() {
                    Outcome::quiet()
                } else {
                    Outcome::say("Nothing to undo")
                }
            }
            Command::Help => Outcome::say(help_text()),
            Command::Quit => Outcome {
                message: None,
                quit: true,
            },
        }
    }

    /// The board, turn label and counts label, one per paragraph.
    pub fn render(&self) -> String {
        let view = self.engine.view();
        let mut out =
            appearance::render_grid(&view.board, self.config.glyphs, self.config.coordinates)
                .unwrap_or_default();
        // Writing into a String cannot fail.
        let _ = write!(
            out,
            "\n\n{}\n{}",
            appearance::turn_label(view.turn),
            appearance::counts_label(view.counts)
        );
        if !view.can_undo {
            let _ = write!(out, "\n({} unavailable)", UNDO_LABEL.to_lowercase());
        }
        out
    }

    /// Read commands from `input` until `quit` or end of input, redrawing to `output` after each.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}\n", self.render())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let outcome = match line.parse::<Command>() {
                Ok(command) => self.handle(command),
                Err(err) => {
                    warn!(%err, "bad input");
                    Outcome::say(format!("{}. Type \"help\" for commands.", err))
                }
            };

            if let Some(message) = outcome.message {
                writeln!(output, "{}", message)?;
            }
            if outcome.quit {
                break;
            }
            writeln!(output, "\n{}\n", self.render())?;
        }

        output.flush()
    }
}

fn help_text() -> String {
    format!(
        "Commands:\n  <square>  place on a square, e.g. d3\n  new       {}\n  skip      {}\n  undo      {}\n  quit      leave",
        NEW_GAME_LABEL, SKIP_LABEL, UNDO_LABEL
    )
}
