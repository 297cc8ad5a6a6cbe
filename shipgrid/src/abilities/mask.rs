use std::fmt;

use crate::MASK_SIZE;

/// Square stencil of `MASK_SIZE` cells per side, centered on its middle cell. A `true`
/// cell is part of the ability's area of effect.
///
/// Masks are independent of any board; see [`Board::overlay`][crate::board::Board::overlay]
/// for projecting one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Mask([[bool; MASK_SIZE]; MASK_SIZE]);

impl Mask {
    /// Index of the middle row and column.
    pub const CENTER: usize = MASK_SIZE / 2;

    /// Build a mask by evaluating `member` for each `(row, col)`.
    fn from_fn(mut member: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = [[false; MASK_SIZE]; MASK_SIZE];
        for (i, row) in cells.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = member(i, j);
            }
        }
        Mask(cells)
    }

    /// Downward cone. The apex is the center cell and each row below it is one cell
    /// wider on each side, clipped to the mask.
    pub fn cone() -> Self {
        let center = Self::CENTER;
        let mut cells = [[false; MASK_SIZE]; MASK_SIZE];
        for d in 0..=center {
            let row = match cells.get_mut(center + d) {
                Some(row) => row,
                None => break,
            };
            let start = center.saturating_sub(d);
            let end = (center + d).min(MASK_SIZE - 1);
            for cell in &mut row[start..=end] {
                *cell = true;
            }
        }
        Mask(cells)
    }

    /// Cross through the center: the whole center row and the whole center column.
    pub fn cross() -> Self {
        let center = Self::CENTER;
        Self::from_fn(|i, j| i == center || j == center)
    }

    /// Diamond of every cell within Manhattan distance `CENTER` of the center.
    pub fn diamond() -> Self {
        let center = Self::CENTER;
        let radius = center;
        Self::from_fn(|i, j| dist(i, center) + dist(j, center) <= radius)
    }

    /// Whether the cell at `(row, col)` is part of the mask. Out of range is `false`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.0
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Index of the middle row and column.
    pub fn center(&self) -> usize {
        Self::CENTER
    }

    /// Number of cells in the mask.
    pub fn count(&self) -> usize {
        self.0.iter().flatten().filter(|&&cell| cell).count()
    }

    /// Iterate the `(row, col)` offsets of every member cell relative to the center, in
    /// row-major order.
    pub fn iter_offsets(&self) -> impl '_ + Iterator<Item = (isize, isize)> {
        let center = Self::CENTER as isize;
        self.0.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(j, _)| (i as isize - center, j as isize - center))
        })
    }

    /// Iterate the rows of the mask.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool; MASK_SIZE]> {
        self.0.iter()
    }
}

fn dist(a: usize, b: usize) -> usize {
    if a > b {
        a - b
    } else {
        b - a
    }
}

impl fmt::Display for Mask {
    /// Prints the mask as rows of `0`/`1`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.0.iter() {
            for (j, &cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if cell { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
