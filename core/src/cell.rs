/// State of a single board position. Whether a mine sits under the cell is part of the variant and never changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    MineHidden,
    MineFlagged,
    /// Uncovered mine, ends the game.
    MineExploded,
    SafeHidden,
    SafeFlagged,
    /// Uncovered safe cell with the number of adjacent mines.
    Revealed(u8),
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::MineHidden | Self::MineFlagged | Self::MineExploded)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::MineHidden | Self::SafeHidden)
    }

    /// Whether this cell contributes to a neighbour's adjacency count.
    pub const fn counts_as_mine(self) -> bool {
        matches!(self, Self::MineHidden | Self::MineFlagged)
    }

    /// Whether the flood fill may uncover this cell.
    pub const fn is_revealable(self) -> bool {
        matches!(self, Self::SafeHidden | Self::SafeFlagged)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::SafeHidden
    }
}
