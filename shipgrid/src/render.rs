//! Text rendering of a [`Board`]. Purely a reader of cell values.
use std::fmt;

use crate::board::Board;

/// Display adapter that prints a board as an indexed grid of cell markers:
///
/// ```text
/// Board (0 = water, 3 = ship, 5 = ability):
///
///      0  1  2 ...
///     ------...
///  0 |  0  0  3 ...
/// ```
#[derive(Debug, Copy, Clone)]
pub struct BoardDisplay<'a> {
    board: &'a Board,
    legend: bool,
}

impl<'a> BoardDisplay<'a> {
    /// Wrap the board for display, including the legend line.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            legend: true,
        }
    }

    /// Omit the legend line and start directly with the column header.
    pub fn without_legend(self) -> Self {
        Self {
            legend: false,
            ..self
        }
    }
}

impl fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.legend {
            writeln!(f, "Board (0 = water, 3 = ship, 5 = ability):")?;
            writeln!(f)?;
        }
        let size = self.board.size();
        write!(f, "    ")?;
        for col in 0..size {
            write!(f, "{:>2} ", col)?;
        }
        writeln!(f)?;
        write!(f, "    ")?;
        for _ in 0..size {
            write!(f, "---")?;
        }
        writeln!(f)?;
        for (i, row) in self.board.iter_rows().enumerate() {
            write!(f, "{:>2} | ", i)?;
            for cell in row {
                write!(f, "{:>2} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Get a [`Display`][fmt::Display] adapter for this board.
    pub fn display(&self) -> BoardDisplay {
        BoardDisplay::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        board::Coordinate,
        ships::{Orientation, Ship},
    };

    #[test]
    fn renders_header_and_rows() {
        let mut board = Board::new();
        board
            .try_place(&Ship::new(), Coordinate::new(0, 7), Orientation::Horizontal)
            .unwrap();
        let text = board.display().without_legend().to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 2 + board.size());
        assert_eq!(lines[0], "     0  1  2  3  4  5  6  7  8  9 ");
        assert_eq!(lines[1], format!("    {}", "-".repeat(30)));
        assert_eq!(lines[2], " 0 |  0  0  0  0  0  0  0  3  3  3 ");
        assert_eq!(lines[11], " 9 |  0  0  0  0  0  0  0  0  0  0 ");
    }

    #[test]
    fn legend_comes_first() {
        let board = Board::new();
        let text = board.display().to_string();
        assert!(text.starts_with("Board (0 = water, 3 = ship, 5 = ability):\n\n    "));
    }
}
