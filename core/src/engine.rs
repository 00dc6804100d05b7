use crate::*;

/// Player command aimed at a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Flag,
    Unflag,
    Uncover,
}

/// A game from the first move until a mine goes off.
///
/// There is no win state: the session only ends in a loss, or when the caller stops sending commands.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    board: Board,
    config: Option<GameConfig>,
    lost: bool,
}

impl Game {
    pub fn new(config: GameConfig, generator: impl MineGenerator) -> Self {
        Self {
            board: Board::generate(config, generator),
            config: Some(config),
            lost: false,
        }
    }

    /// Starts a game on a prepared board.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            config: None,
            lost: false,
        }
    }

    /// Preset the board was generated from, `None` for prepared boards.
    pub fn config(&self) -> Option<GameConfig> {
        self.config
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn width(&self) -> Coord {
        self.board.stride()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board.cell_at(coords)
    }

    pub fn snapshot(&self) -> &[Cell] {
        self.board.snapshot()
    }

    pub fn apply(&mut self, command: Command, coords: Coord2) -> Result<ApplyOutcome> {
        let coords = self.board.validate_coords(coords)?;
        self.check_not_lost()?;

        let outcome = match command {
            Command::Flag => self.board.flag(coords),
            Command::Unflag => self.board.unflag(coords),
            Command::Uncover => self.board.uncover(coords),
        };
        log::debug!("{:?} at {:?}: {:?}", command, coords, outcome);

        if outcome == ApplyOutcome::Exploded {
            log::info!("mine hit at {:?}, game lost", coords);
            self.lost = true;
        }
        Ok(outcome)
    }

    fn check_not_lost(&self) -> Result<()> {
        if self.lost {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
