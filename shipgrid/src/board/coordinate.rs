use std::fmt;

/// The coordinates of a cell on the board, addressed by row then column.
///
/// Components are signed so that origins which fall off the board (for example the far
/// end of a ship pointing up from row 0) can still be expressed and rejected rather than
/// wrapping around.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Vertical position of the cell, increasing downwards.
    pub row: isize,
    /// Horizontal position of the cell, increasing to the right.
    pub col: isize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub fn new(row: isize, col: isize) -> Self {
        Self { row, col }
    }

    /// Shift this coordinate by the given deltas. Returns `None` if either component
    /// overflows, which callers treat the same as being out of bounds.
    pub fn offset(self, row_delta: isize, col_delta: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add(row_delta)?,
            col: self.col.checked_add(col_delta)?,
        })
    }
}

impl From<(isize, isize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (isize, isize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (isize, isize) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}
