pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Mine density preset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Fraction of the board covered by mines.
    pub const fn density(self) -> f32 {
        use Difficulty::*;
        match self {
            Easy => 0.10,
            Medium => 0.25,
            Hard => 0.50,
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Easy),
            1 => Ok(Self::Medium),
            2 => Ok(Self::Hard),
            other => Err(GameError::InvalidDifficulty(other)),
        }
    }
}

/// Board side length preset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BoardSize {
    Small,
    Normal,
    Large,
}

impl BoardSize {
    pub const fn stride(self) -> Coord {
        use BoardSize::*;
        match self {
            Small => 25,
            Normal => 50,
            Large => 100,
        }
    }
}

impl TryFrom<u8> for BoardSize {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Small),
            1 => Ok(Self::Normal),
            2 => Ok(Self::Large),
            other => Err(GameError::InvalidSize(other)),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub difficulty: Difficulty,
    pub size: BoardSize,
}

impl GameConfig {
    pub const fn new(difficulty: Difficulty, size: BoardSize) -> Self {
        Self { difficulty, size }
    }

    pub const fn stride(&self) -> Coord {
        self.size.stride()
    }

    pub const fn total_cells(&self) -> CellCount {
        area(self.stride())
    }

    /// Number of mine draws, `floor(total_cells * density)`.
    pub fn requested_mines(&self) -> CellCount {
        (f32::from(self.total_cells()) * self.difficulty.density()) as CellCount
    }
}

/// What a single command did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    NoChange,
    Marked,
    /// Number of cells the flood fill uncovered.
    Revealed(usize),
    Exploded,
}

impl ApplyOutcome {
    pub const fn has_update(self) -> bool {
        use ApplyOutcome::*;
        match self {
            NoChange => false,
            Marked => true,
            Revealed(count) => count > 0,
            Exploded => true,
        }
    }
}
