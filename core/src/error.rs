use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board stride must be at least 1")]
    InvalidStride,
    #[error("Invalid difficulty {0}, expected 0 - 2")]
    InvalidDifficulty(u8),
    #[error("Invalid board size {0}, expected 0 - 2")]
    InvalidSize(u8),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
