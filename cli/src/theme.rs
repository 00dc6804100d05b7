use crossterm::style::Color;
use mineterm_core::Cell;

/// Colours for each glyph class.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    pub exploded: Color,
    pub flag: Color,
    pub hidden: Color,
    /// Indexed by adjacent mine count.
    pub counts: [Color; 9],
}

impl Palette {
    pub const CLASSIC: Self = Self {
        exploded: Color::Black,
        flag: Color::Yellow,
        hidden: Color::White,
        counts: [
            Color::DarkGrey,
            Color::DarkGreen,
            Color::DarkCyan,
            Color::DarkBlue,
            Color::DarkRed,
            Color::DarkMagenta,
            Color::Red,
            Color::Green,
            Color::Magenta,
        ],
    };

    pub fn color_for(&self, cell: Cell) -> Color {
        use Cell::*;
        match cell {
            MineExploded => self.exploded,
            MineFlagged | SafeFlagged => self.flag,
            MineHidden | SafeHidden => self.hidden,
            Revealed(count) => self.counts[usize::from(count.min(8))],
        }
    }
}

/// Rendering style, `None` prints bare glyphs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Theme {
    pub palette: Option<Palette>,
}

impl Theme {
    pub const fn plain() -> Self {
        Self { palette: None }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: Some(Palette::CLASSIC),
        }
    }
}
