//! Defines the cells that make up the board and the fixed-size store that holds them.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use crate::{board::Coordinate, BOARD_SIZE};

/// State of a single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Cell {
    /// Open water.
    Empty,
    /// Part of a placed ship.
    Occupied,
    /// Marked by an ability overlay.
    Affected,
}

impl Cell {
    /// Numeric marker used when printing the board: `0` for water, `3` for a ship and
    /// `5` for an ability mark.
    pub fn marker(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied => 3,
            Cell::Affected => 5,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.marker(), f)
    }
}

/// Square store of `BOARD_SIZE * BOARD_SIZE` cells, laid out row-major.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        }
    }

    /// Set every cell back to [`Cell::Empty`].
    pub(super) fn clear(&mut self) {
        for cell in self.cells.iter_mut() {
            *cell = Cell::Empty;
        }
    }

    /// Convert a coordinate to a linear index within the grid.
    /// Returns `None` if the coordinate is out of bounds.
    #[inline]
    pub(super) fn try_linearize(coord: &Coordinate) -> Option<usize> {
        let size = BOARD_SIZE as isize;
        if (0..size).contains(&coord.row) && (0..size).contains(&coord.col) {
            Some(coord.row as usize * BOARD_SIZE + coord.col as usize)
        } else {
            None
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get(&self, coord: &Coordinate) -> Option<&Cell> {
        Self::try_linearize(coord).and_then(|i| self.cells.get(i))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut(&mut self, coord: &Coordinate) -> Option<&mut Cell> {
        Self::try_linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }

    /// Iterate the rows of the grid from top to bottom.
    pub(super) fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(BOARD_SIZE)
    }

    /// Iterate every cell in row-major order.
    pub(super) fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }
}

impl<'a> Index<&'a Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: &'a Coordinate) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<'a> IndexMut<&'a Coordinate> for Grid {
    fn index_mut(&mut self, coord: &'a Coordinate) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
