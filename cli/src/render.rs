use crossterm::style::Stylize;
use mineterm_core::{Cell, Game};
use std::io::{self, Write};

use crate::theme::Theme;

pub const LOST_BANNER: &str = "YOU LOSE";

/// Single character shown for a cell, mines stay hidden until they go off.
pub const fn glyph(cell: Cell) -> char {
    use Cell::*;
    match cell {
        MineExploded => 'M',
        MineFlagged | SafeFlagged => 'F',
        MineHidden | SafeHidden => '/',
        Revealed(count) => match char::from_digit(count as u32, 10) {
            Some(digit) => digit,
            None => '?',
        },
    }
}

/// Writes the board one row per line, followed by the loss banner once the game is over.
pub fn render(writer: &mut dyn Write, game: &Game, theme: &Theme) -> io::Result<()> {
    let stride = usize::from(game.width());
    for row in game.snapshot().chunks(stride) {
        for &cell in row {
            let glyph = glyph(cell);
            match theme.palette {
                Some(palette) => write!(writer, "{} ", glyph.with(palette.color_for(cell)))?,
                None => write!(writer, "{} ", glyph)?,
            }
        }
        writeln!(writer)?;
    }

    if game.is_lost() {
        writeln!(writer, "{}", LOST_BANNER)?;
    }
    Ok(())
}
