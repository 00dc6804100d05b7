/// Single coordinate axis used for the board stride and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

/// Number of cells on a board of side `stride`, at most `255 * 255`.
pub const fn area(stride: Coord) -> CellCount {
    stride as CellCount * stride as CellCount
}

/// Flat row-major index of `coords` on a board of side `stride`.
pub const fn flat_index((x, y): Coord2, stride: Coord) -> usize {
    y as usize * stride as usize + x as usize
}

/// Inverse of [`flat_index`], `None` when `index` is past the last cell.
pub fn from_flat_index(index: usize, stride: Coord) -> Option<Coord2> {
    if index >= usize::from(area(stride)) {
        return None;
    }
    let stride = usize::from(stride);
    let x = Coord::try_from(index % stride).ok()?;
    let y = Coord::try_from(index / stride).ok()?;
    Some((x, y))
}

/// Cells touching `(x, y)` on a board of side `stride`, in row-major order, the cell itself excluded.
///
/// Rows and columns are clamped separately, so a cell on the last row never looks below it whatever its column.
pub fn square_neighbors((x, y): Coord2, stride: Coord) -> impl Iterator<Item = Coord2> {
    let last = stride.saturating_sub(1);
    let columns = x.saturating_sub(1)..=x.saturating_add(1).min(last);
    let rows = y.saturating_sub(1)..=y.saturating_add(1).min(last);

    rows.flat_map(move |row| columns.clone().map(move |column| (column, row)))
        .filter(move |&pos| pos != (x, y))
}
