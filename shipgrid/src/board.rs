//! Types that make up the game board.

use crate::BOARD_SIZE;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    errors::{CannotPlaceReason, PlaceError},
    grid::Cell,
    placement::Placement,
};

mod coordinate;
mod errors;
mod grid;
mod overlay;
mod placement;

/// A single player's side of the ocean: a fixed `BOARD_SIZE` square of cells, plus a
/// record of the ships that were placed on it.
///
/// Cells only ever move away from [`Cell::Empty`]. Ships mark cells
/// [`Cell::Occupied`], ability overlays mark them [`Cell::Affected`], and an overlay never
/// touches an occupied cell. The only way back to an empty board is
/// [`initialize`][Board::initialize].
#[derive(Debug, Clone)]
pub struct Board {
    /// Grid of cells.
    grid: Grid,

    /// Ships committed to the grid, in placement order.
    placements: Vec<Placement>,
}

impl Board {
    /// Construct a new board with every cell empty.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            placements: Vec::new(),
        }
    }

    /// Reset every cell to [`Cell::Empty`] and forget all placed ships.
    pub fn initialize(&mut self) {
        self.grid.clear();
        self.placements.clear();
    }

    /// Width and height of the board.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Returns true if the coordinate lies on the board.
    pub fn in_bounds(&self, coord: Coordinate) -> bool {
        self.grid.get(&coord).is_some()
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Cell> {
        self.grid.get(&coord).copied()
    }

    /// Get an iterator over the rows of the board, top to bottom. Each row is a slice of
    /// `BOARD_SIZE` cells, left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Count the cells currently in the given state.
    pub fn count(&self, state: Cell) -> usize {
        self.grid.cells().filter(|&&cell| cell == state).count()
    }

    /// Get an iterator over the ships placed on this board, in the order they were placed.
    pub fn iter_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Board {
    /// Boards compare by cell contents only.
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for Board {}
