use anyhow::Context;
use mineterm_core::{BoardSize, Command, Coord, Coord2, Difficulty, Game, GameConfig};
use std::io::{BufRead, Write};
use thiserror::Error;

use crate::render::render;
use crate::theme::Theme;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Input ended before the game did")]
    UnexpectedEof,
    #[error("Expected a number, got {0:?}")]
    NotANumber(String),
    #[error("Invalid location {value}, expected 0 - {max}")]
    InvalidLocation { value: i64, max: Coord },
    #[error("Invalid {what} {value}, expected 0 - 2")]
    InvalidChoice { what: &'static str, value: i64 },
}

/// Parses an X answer, which may carry a command prefix: `f` flags, `u` removes a flag, no prefix uncovers.
pub fn parse_x_answer(line: &str) -> Result<(Command, i64), InputError> {
    let line = line.trim();
    let (command, rest) = match line.chars().next() {
        Some('f' | 'F') => (Command::Flag, &line[1..]),
        Some('u' | 'U') => (Command::Unflag, &line[1..]),
        _ => (Command::Uncover, line),
    };
    Ok((command, parse_number(rest)?))
}

pub fn parse_number(text: &str) -> Result<i64, InputError> {
    let text = text.trim();
    text.parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))
}

/// Checks that `value` is a coordinate on a board of side `width`.
pub fn to_coord(value: i64, width: Coord) -> Result<Coord, InputError> {
    let max = width.saturating_sub(1);
    match Coord::try_from(value) {
        Ok(coord) if coord < width => Ok(coord),
        _ => Err(InputError::InvalidLocation { value, max }),
    }
}

/// Terminal front end: prompts on `output`, reads answers from `input` and drives a [`Game`].
pub struct Session<R, W> {
    input: R,
    output: W,
    theme: Theme,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, theme: Theme) -> Self {
        Self {
            input,
            output,
            theme,
        }
    }

    fn prompt(&mut self, question: &str) -> anyhow::Result<String> {
        writeln!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Could not read from input")?;
        if read == 0 {
            return Err(InputError::UnexpectedEof.into());
        }
        Ok(line)
    }

    fn prompt_menu(&mut self, what: &'static str) -> anyhow::Result<u8> {
        let line = self.prompt(&format!("Please enter {} (0 - 2)", what))?;
        let value = parse_number(&line)?;
        let choice = u8::try_from(value).map_err(|_| InputError::InvalidChoice { what, value })?;
        Ok(choice)
    }

    /// Asks for whichever of difficulty and size was not given on the command line.
    pub fn read_config(
        &mut self,
        difficulty: Option<u8>,
        size: Option<u8>,
    ) -> anyhow::Result<GameConfig> {
        let difficulty = match difficulty {
            Some(value) => value,
            None => self.prompt_menu("difficulty")?,
        };
        let difficulty = Difficulty::try_from(difficulty)?;

        let size = match size {
            Some(value) => value,
            None => self.prompt_menu("board size")?,
        };
        let size = BoardSize::try_from(size)?;

        Ok(GameConfig::new(difficulty, size))
    }

    pub fn read_move(&mut self, width: Coord) -> anyhow::Result<(Command, Coord2)> {
        let max = width.saturating_sub(1);

        let line = self.prompt(&format!("Please enter X index (0 - {})", max))?;
        let (command, x) = parse_x_answer(&line)?;
        let line = self.prompt(&format!("Please enter Y index (0 - {})", max))?;
        let y = parse_number(&line)?;

        Ok((command, (to_coord(x, width)?, to_coord(y, width)?)))
    }

    fn draw(&mut self, game: &Game) -> anyhow::Result<()> {
        render(&mut self.output, game, &self.theme).context("Could not draw the board")?;
        self.output.flush()?;
        Ok(())
    }

    /// Plays until a mine goes off. The board is only redrawn after a move that changed it.
    pub fn run(&mut self, game: &mut Game) -> anyhow::Result<()> {
        self.draw(game)?;

        while !game.is_lost() {
            let (command, coords) = self.read_move(game.width())?;
            let outcome = game.apply(command, coords)?;
            log::debug!("{:?} {:?} -> {:?}", command, coords, outcome);
            if outcome.has_update() {
                self.draw(game)?;
            }
        }

        Ok(())
    }
}
