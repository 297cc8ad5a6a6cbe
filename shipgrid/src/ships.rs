//! Types used for defining ships and the directions they can be placed in.
use std::fmt;

use enumflags2::BitFlags;

use crate::{board::Cell, SHIP_LEN};

pub use self::linear::{project, ShapeProjection};

mod linear;

/// Placement orientation of a ship. Each orientation walks from the ship's origin by a
/// fixed per-step delta.
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Orientation {
    /// Left to right along a row.
    Horizontal = 0b0001,
    /// Top to bottom along a column.
    Vertical = 0b0010,
    /// Down and to the right along the main diagonal.
    DiagonalDownRight = 0b0100,
    /// Up and to the right along the anti-diagonal.
    DiagonalUpRight = 0b1000,
}

impl Orientation {
    /// All orientations, in declaration order.
    pub const ALL: &'static [Orientation] = &[
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalUpRight,
    ];

    /// The `(row, col)` step taken between consecutive cells of a ship.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalUpRight => (-1, 1),
        }
    }

    /// Short human-readable name for this orientation.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDownRight => "diagonal down-right",
            Orientation::DiagonalUpRight => "diagonal up-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A ship of fixed length. Every segment carries the same marker, which is copied into
/// the board when the ship is placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ship([Cell; SHIP_LEN]);

impl Ship {
    /// Construct a ship whose segments are all [`Cell::Occupied`].
    pub fn new() -> Self {
        Ship([Cell::Occupied; SHIP_LEN])
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the markers for each segment of the ship, from the origin outwards.
    pub fn markers(&self) -> &[Cell; SHIP_LEN] {
        &self.0
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// Set of orientations, as returned by [`Board::placements_at`][crate::board::Board::placements_at].
pub type Orientations = BitFlags<Orientation>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_match_directions() {
        assert_eq!(Orientation::Horizontal.delta(), (0, 1));
        assert_eq!(Orientation::Vertical.delta(), (1, 0));
        assert_eq!(Orientation::DiagonalDownRight.delta(), (1, 1));
        assert_eq!(Orientation::DiagonalUpRight.delta(), (-1, 1));
    }

    #[test]
    fn all_lists_every_flag_once() {
        let mut flags = Orientations::empty();
        for &orientation in Orientation::ALL {
            assert!(!flags.contains(orientation), "{:?} listed twice", orientation);
            flags.insert(orientation);
        }
        assert_eq!(flags, Orientations::all());
    }

    #[test]
    fn new_ship_is_all_occupied() {
        let ship = Ship::new();
        assert_eq!(ship.len(), SHIP_LEN);
        assert!(ship.markers().iter().all(|&m| m == Cell::Occupied));
    }
}
