use ndarray::Array2;
use crate::*;

/// Array index of `coords`, rows first so the standard layout is row-major.
fn nd((x, y): Coord2) -> [usize; 2] {
    [usize::from(y), usize::from(x)]
}

/// Square minefield grid, stored row-major so that `snapshot()[y * stride + x]` is the cell at `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    stride: Coord,
    mine_count: CellCount,
}

impl Board {
    /// A board of `stride * stride` hidden safe cells.
    pub fn empty(stride: Coord) -> Result<Self> {
        if stride == 0 {
            return Err(GameError::InvalidStride);
        }
        Ok(Self::empty_unchecked(stride))
    }

    fn empty_unchecked(stride: Coord) -> Self {
        Self {
            cells: Array2::from_elem(nd((stride, stride)), Cell::SafeHidden),
            stride,
            mine_count: 0,
        }
    }

    /// Builds a preset board, with mines where `generator` puts them.
    pub fn generate(config: GameConfig, generator: impl MineGenerator) -> Self {
        let mut board = Self::empty_unchecked(config.stride());
        let requested = config.requested_mines();
        board.place_mines(generator.generate(config));
        log::debug!(
            "generated {0}x{0} board, mines requested: {1}, placed: {2}",
            board.stride,
            requested,
            board.mine_count
        );
        board
    }

    /// Builds a board with mines exactly at `mines`, any square size is accepted.
    pub fn from_mines(stride: Coord, mines: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(stride)?;
        for &coords in mines {
            board.validate_coords(coords)?;
        }
        board.place_mines(mines.iter().map(|&coords| flat_index(coords, stride)));
        Ok(board)
    }

    /// Marks every flat index as a mine. Repeated indices land on the same cell, indices past the board are
    /// dropped.
    fn place_mines(&mut self, indices: impl IntoIterator<Item = usize>) {
        let stride = self.stride;
        for index in indices {
            match from_flat_index(index, stride) {
                Some(coords) => self.cells[nd(coords)] = Cell::MineHidden,
                None => log::warn!(
                    "Ignoring mine index {} outside the {}x{} board",
                    index,
                    stride,
                    stride
                ),
            }
        }
        self.mine_count = self
            .cells
            .iter()
            .filter(|cell| cell.is_mine())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
    }

    pub fn stride(&self) -> Coord {
        self.stride
    }

    /// Number of distinct cells holding a mine.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.stride && coords.1 < self.stride {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.cells[nd(coords)]
    }

    /// All cells in row-major order.
    pub fn snapshot(&self) -> &[Cell] {
        self.cells
            .as_slice()
            .expect("grid layout should be standard")
    }

    /// Number of hidden or flagged mines around `coords`.
    pub fn count_neighbor_mines(&self, coords: Coord2) -> u8 {
        let mut count = 0;
        for pos in square_neighbors(coords, self.stride) {
            if self.cells[nd(pos)].counts_as_mine() {
                count += 1;
            }
        }
        count
    }

    /// Uncovers `coords` and, through every zero cell reached, the connected region around it.
    ///
    /// Mines are never uncovered here and each cell is revealed at most once, so calling this again on the same
    /// origin changes nothing. Returns how many cells were revealed.
    pub fn reveal(&mut self, coords: Coord2) -> usize {
        let mut revealed = 0;
        let mut to_visit = vec![coords];

        while let Some(visit_coords) = to_visit.pop() {
            let index = nd(visit_coords);
            if !self.cells[index].is_revealable() {
                continue;
            }

            let count = self.count_neighbor_mines(visit_coords);
            self.cells[index] = Cell::Revealed(count);
            revealed += 1;
            log::trace!("revealed {:?}, adjacent mines: {}", visit_coords, count);

            if count == 0 {
                to_visit.extend(square_neighbors(visit_coords, self.stride));
            }
        }

        log::debug!("flood fill from {:?} revealed {} cells", coords, revealed);
        revealed
    }

    pub fn flag(&mut self, coords: Coord2) -> ApplyOutcome {
        use Cell::*;

        let cell = &mut self.cells[nd(coords)];
        match *cell {
            MineHidden => *cell = MineFlagged,
            SafeHidden => *cell = SafeFlagged,
            MineFlagged | SafeFlagged | MineExploded | Revealed(_) => {
                return ApplyOutcome::NoChange;
            }
        }
        ApplyOutcome::Marked
    }

    pub fn unflag(&mut self, coords: Coord2) -> ApplyOutcome {
        use Cell::*;

        let cell = &mut self.cells[nd(coords)];
        match *cell {
            MineFlagged => *cell = MineHidden,
            SafeFlagged => *cell = SafeHidden,
            MineHidden | SafeHidden | MineExploded | Revealed(_) => {
                return ApplyOutcome::NoChange;
            }
        }
        ApplyOutcome::Marked
    }

    /// Explodes a mine (flagged or not), or flood-fills from a safe cell.
    pub fn uncover(&mut self, coords: Coord2) -> ApplyOutcome {
        let index = nd(coords);
        if self.cells[index].counts_as_mine() {
            self.cells[index] = Cell::MineExploded;
            return ApplyOutcome::Exploded;
        }

        match self.reveal(coords) {
            0 => ApplyOutcome::NoChange,
            count => ApplyOutcome::Revealed(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(stride: Coord, mines: &[Coord2]) -> Board {
        Board::from_mines(stride, mines).unwrap()
    }

    fn revealed_count(board: &Board) -> usize {
        board
            .snapshot()
            .iter()
            .filter(|cell| matches!(cell, Cell::Revealed(_)))
            .count()
    }

    #[test]
    fn from_mines_rejects_bad_input() {
        assert_eq!(Board::from_mines(0, &[]), Err(GameError::InvalidStride));
        assert_eq!(Board::from_mines(3, &[(3, 0)]), Err(GameError::InvalidCoords));
        assert_eq!(Board::from_mines(3, &[(0, 3)]), Err(GameError::InvalidCoords));
    }

    #[test]
    fn from_mines_counts_distinct_cells() {
        let board = board(4, &[(1, 1), (1, 1), (3, 2)]);
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.snapshot()[5], Cell::MineHidden);
        assert_eq!(board.snapshot()[11], Cell::MineHidden);
        assert_eq!(board.snapshot().len(), 16);
    }

    struct FixedIndices(Vec<usize>);

    impl MineGenerator for FixedIndices {
        fn generate(self, _config: GameConfig) -> Vec<usize> {
            self.0
        }
    }

    #[test]
    fn generated_indices_past_the_board_are_dropped() {
        let config = GameConfig::new(Difficulty::Easy, BoardSize::Small);
        let board = Board::generate(config, FixedIndices(vec![256 * 25 + 3, 625, 26]));

        assert_eq!(board.mine_count(), 1);
        assert_eq!(board.cell_at((3, 0)), Cell::SafeHidden);
        assert_eq!(board.cell_at((0, 24)), Cell::SafeHidden);
        assert_eq!(board.cell_at((1, 1)), Cell::MineHidden);
    }

    #[test]
    fn count_stays_within_neighbor_count() {
        let all_mines: Vec<Coord2> = (0..5)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .collect();
        let board = board(5, &all_mines);

        assert_eq!(board.count_neighbor_mines((0, 0)), 3);
        assert_eq!(board.count_neighbor_mines((4, 0)), 3);
        assert_eq!(board.count_neighbor_mines((2, 4)), 5);
        assert_eq!(board.count_neighbor_mines((4, 2)), 5);
        assert_eq!(board.count_neighbor_mines((2, 2)), 8);
    }

    #[test]
    fn count_includes_flagged_mines() {
        let mut board = board(3, &[(0, 0), (2, 2)]);
        let before = board.count_neighbor_mines((1, 1));

        assert_eq!(board.flag((0, 0)), ApplyOutcome::Marked);
        assert_eq!(board.count_neighbor_mines((1, 1)), before);
        assert_eq!(before, 2);
    }

    #[test]
    fn bottom_row_does_not_look_below_the_board() {
        let board = board(3, &[(0, 1)]);
        assert_eq!(board.count_neighbor_mines((0, 2)), 1);
        assert_eq!(board.count_neighbor_mines((2, 2)), 0);
    }

    #[test]
    fn single_center_mine_reveals_border_and_ring() {
        let mut board = board(5, &[(2, 2)]);

        assert_eq!(board.snapshot()[12], Cell::MineHidden);
        assert_eq!(board.reveal((0, 0)), 24);

        for y in 0..5 {
            for x in 0..5 {
                let expected = match (x, y) {
                    (2, 2) => Cell::MineHidden,
                    (1..=3, 1..=3) => Cell::Revealed(1),
                    _ => Cell::Revealed(0),
                };
                assert_eq!(board.cell_at((x, y)), expected, "at {:?}", (x, y));
            }
        }
    }

    #[test]
    fn reveal_is_idempotent() {
        let mut board = board(6, &[(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]);

        let first = board.reveal((0, 0));
        let after_first = board.clone();
        let second = board.reveal((0, 0));

        assert_eq!(first, 18);
        assert_eq!(second, 0);
        assert_eq!(board, after_first);
    }

    #[test]
    fn reveal_stops_at_region_boundary() {
        // wall of mines on column 2 splits the board in two
        let mut board = board(5, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);

        board.reveal((0, 2));

        for y in 0..5 {
            assert_eq!(board.cell_at((0, y)), Cell::Revealed(0));
            assert!(matches!(board.cell_at((1, y)), Cell::Revealed(n) if n >= 2));
            assert_eq!(board.cell_at((3, y)), Cell::SafeHidden);
            assert_eq!(board.cell_at((4, y)), Cell::SafeHidden);
        }
        assert_eq!(revealed_count(&board), 10);
    }

    #[test]
    fn reveal_of_numbered_cell_does_not_spread() {
        let mut board = board(3, &[(0, 0)]);

        assert_eq!(board.reveal((1, 1)), 1);
        assert_eq!(board.cell_at((1, 1)), Cell::Revealed(1));
        assert_eq!(revealed_count(&board), 1);
    }

    #[test]
    fn reveal_uncovers_flagged_safe_cells() {
        let mut board = board(4, &[(3, 3)]);
        board.flag((0, 3));

        board.reveal((0, 0));

        assert_eq!(board.cell_at((0, 3)), Cell::Revealed(0));
        assert_eq!(board.cell_at((3, 3)), Cell::MineHidden);
        assert_eq!(revealed_count(&board), 15);
    }

    #[test]
    fn reveal_never_touches_mines() {
        let mut board = board(3, &[(1, 1)]);
        assert_eq!(board.reveal((1, 1)), 0);
        assert_eq!(board.cell_at((1, 1)), Cell::MineHidden);
    }

    #[test]
    fn large_board_fill_is_stack_safe() {
        let mut board = board(100, &[(99, 99)]);

        assert_eq!(board.reveal((0, 0)), 9_999);
        assert_eq!(board.cell_at((98, 98)), Cell::Revealed(1));
        assert_eq!(board.cell_at((99, 99)), Cell::MineHidden);
    }

    #[test]
    fn flag_transitions() {
        let mut board = board(3, &[(0, 0)]);

        assert_eq!(board.flag((0, 0)), ApplyOutcome::Marked);
        assert_eq!(board.cell_at((0, 0)), Cell::MineFlagged);
        assert_eq!(board.flag((0, 0)), ApplyOutcome::NoChange);
        assert_eq!(board.cell_at((0, 0)), Cell::MineFlagged);

        assert_eq!(board.flag((2, 2)), ApplyOutcome::Marked);
        assert_eq!(board.cell_at((2, 2)), Cell::SafeFlagged);

        board.reveal((1, 1));
        assert_eq!(board.flag((1, 1)), ApplyOutcome::NoChange);
        assert_eq!(board.cell_at((1, 1)), Cell::Revealed(1));
    }

    #[test]
    fn unflag_restores_hidden_variant() {
        let mut board = board(2, &[(0, 0)]);
        board.flag((0, 0));
        board.flag((1, 1));

        assert_eq!(board.unflag((0, 0)), ApplyOutcome::Marked);
        assert_eq!(board.unflag((1, 1)), ApplyOutcome::Marked);
        assert_eq!(board.cell_at((0, 0)), Cell::MineHidden);
        assert_eq!(board.cell_at((1, 1)), Cell::SafeHidden);
        assert_eq!(board.unflag((1, 0)), ApplyOutcome::NoChange);
    }

    #[test]
    fn flagging_never_changes_mine_membership() {
        let mut board = board(3, &[(0, 0), (2, 1)]);
        for y in 0..3 {
            for x in 0..3 {
                board.flag((x, y));
                board.unflag((x, y));
                board.flag((x, y));
            }
        }
        let mines = board.snapshot().iter().filter(|cell| cell.is_mine()).count();
        assert_eq!(mines, 2);
        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn uncover_flagged_mine_explodes() {
        let mut board = board(2, &[(1, 0)]);
        board.flag((1, 0));

        assert_eq!(board.uncover((1, 0)), ApplyOutcome::Exploded);
        assert_eq!(board.cell_at((1, 0)), Cell::MineExploded);
        assert_eq!(board.flag((1, 0)), ApplyOutcome::NoChange);
        assert_eq!(board.uncover((1, 0)), ApplyOutcome::NoChange);
    }
}
