//! Line-oriented command shell.
//!
//! Reads one command per line, applies it to a [`Game`] and writes the new
//! frame. Refused clicks and jumps are reported and the game carries on.

use crate::config::OutputFormat;
use crate::game::Game;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// Command verbs understood by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Verb {
    /// Place a mark.
    #[strum(to_string = "click", serialize = "c")]
    Click,
    /// Move the cursor.
    #[strum(to_string = "jump", serialize = "j")]
    Jump,
    /// Toggle move-list order.
    #[strum(to_string = "sort", serialize = "s")]
    Sort,
    /// Print the current frame.
    Show,
    /// Print usage.
    #[strum(to_string = "help", serialize = "?")]
    Help,
    /// Leave the shell.
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click cell 0-8.
    Click(usize),
    /// Jump to history index.
    Jump(usize),
    /// Toggle move-list order.
    Sort,
    /// Print the current frame.
    Show,
    /// Print usage.
    Help,
    /// Leave the shell.
    Quit,
}

/// Error parsing a shell line.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    /// Blank line.
    #[display("Empty command")]
    Empty,
    /// First word is not a known verb.
    #[display("Unknown command: {_0}")]
    Unknown(#[error(not(source))] String),
    /// Verb needs a number.
    #[display("{_0} needs a number")]
    MissingArgument(#[error(not(source))] Verb),
    /// Argument is not a number.
    #[display("Not a number: {_0}")]
    InvalidNumber(#[error(not(source))] String),
}

/// Usage text for `help`.
pub const HELP: &str = "\
Commands:
  <0-8> | click <0-8>   place the next mark
  jump <n>              show move #n (0 is the game start)
  sort                  toggle move-list order
  show                  print the board again
  help                  this text
  quit                  leave";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(ParseCommandError::Empty)?;

        // A bare number is a click.
        if let Ok(cell) = first.parse::<usize>() {
            return Ok(Command::Click(cell));
        }

        let verb =
            Verb::from_str(first).map_err(|_| ParseCommandError::Unknown(first.to_string()))?;
        let mut number = || -> Result<usize, ParseCommandError> {
            let word = words.next().ok_or(ParseCommandError::MissingArgument(verb))?;
            word.parse()
                .map_err(|_| ParseCommandError::InvalidNumber(word.to_string()))
        };

        Ok(match verb {
            Verb::Click => Command::Click(number()?),
            Verb::Jump => Command::Jump(number()?),
            Verb::Sort => Command::Sort,
            Verb::Show => Command::Show,
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        })
    }
}

/// Interactive shell over any reader and writer.
pub struct Shell<R, W> {
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell printing frames in `format`.
    pub fn new(input: R, output: W, format: OutputFormat) -> Self {
        Self {
            input,
            output,
            format,
        }
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all, fields(format = %self.format))]
    pub fn run(&mut self, game: &mut Game) -> Result<()> {
        self.write_frame(game)?;

        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read command")?;
            if read == 0 {
                debug!("End of input");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(game, command)?,
                Err(e) => {
                    debug!(error = %e, "Unparseable command");
                    writeln!(self.output, "{e} (type `help` for commands)")?;
                }
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Applies one command and prints the result.
    #[instrument(skip(self, game))]
    pub fn execute(&mut self, game: &mut Game, command: Command) -> Result<()> {
        let outcome = match command {
            Command::Click(cell) => game.handle_cell_click(cell).map(|_| ()),
            Command::Jump(index) => game.jump_to(index),
            Command::Sort => {
                game.toggle_sort();
                Ok(())
            }
            Command::Show => Ok(()),
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                return Ok(());
            }
            Command::Quit => return Ok(()),
        };

        if let Err(e) = outcome {
            warn!(error = %e, "Command refused");
            writeln!(self.output, "Ignored: {e}")?;
            return Ok(());
        }
        self.write_frame(game)
    }

    /// Prints the current frame.
    pub fn write_frame(&mut self, game: &Game) -> Result<()> {
        write_frame(&mut self.output, game, self.format)
    }

    /// Consumes the shell, returning its writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Writes one frame of `game` to `out`.
pub fn write_frame(out: &mut impl Write, game: &Game, format: OutputFormat) -> Result<()> {
    let view = game.view();
    match format {
        OutputFormat::Text => writeln!(out, "{view}")?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &view).context("Failed to encode frame")?;
            writeln!(out)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!("4".parse::<Command>(), Ok(Command::Click(4)));
        assert_eq!("click 8".parse::<Command>(), Ok(Command::Click(8)));
        assert_eq!("J 2".parse::<Command>(), Ok(Command::Jump(2)));
        assert_eq!("  sort ".parse::<Command>(), Ok(Command::Sort));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("exit".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "undo".parse::<Command>(),
            Err(ParseCommandError::Unknown("undo".to_string()))
        );
        assert_eq!(
            "jump".parse::<Command>(),
            Err(ParseCommandError::MissingArgument(Verb::Jump))
        );
        assert_eq!(
            "jump two".parse::<Command>(),
            Err(ParseCommandError::InvalidNumber("two".to_string()))
        );
    }

    #[test]
    fn test_refused_click_reported() {
        let mut game = Game::new();
        let mut shell = Shell::new(&b""[..], Vec::new(), OutputFormat::Text);
        shell.execute(&mut game, Command::Click(4)).unwrap();
        shell.execute(&mut game, Command::Click(4)).unwrap();
        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Ignored: Center is already occupied"));
        assert_eq!(game.history().len(), 2);
    }
}
