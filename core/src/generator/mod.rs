use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Flat row-major indices of the cells that should hold a mine, repeats allowed.
    fn generate(self, config: GameConfig) -> Vec<usize>;
}

/// How mine positions are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    /// Independent draws, a repeated draw lands on an existing mine so fewer mines may be placed than requested.
    #[default]
    Independent,
    /// Draws without replacement, places exactly as many mines as requested while there is room.
    Distinct,
}
