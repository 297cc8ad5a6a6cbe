//! A fixed 10x10 battleship board with straight and diagonal ship placement, plus
//! area-of-effect abilities that can be overlaid on the board.
//!
//! Ships are placed with a check-then-act pair, [`Board::can_place`] followed by
//! [`Board::place`], or in one step with [`Board::try_place`]. Once the fleet is down,
//! ability [`Mask`]s are projected onto the board with [`Board::overlay`], which clips at
//! the board edge and never marks a cell that holds a ship.
//!
//! ```
//! use shipgrid::{AbilityShape, Board, Cell, Coordinate, Orientation, Ship};
//!
//! let mut board = Board::new();
//! let origin = Coordinate::new(2, 1);
//! assert!(board.can_place(origin, Orientation::Horizontal));
//! board.place(&Ship::new(), origin, Orientation::Horizontal);
//! assert!(!board.can_place(origin, Orientation::Vertical));
//!
//! board.overlay(&AbilityShape::Cross.mask(), Coordinate::new(2, 2));
//! assert_eq!(board.get(Coordinate::new(2, 2)), Some(Cell::Occupied));
//! assert_eq!(board.get(Coordinate::new(1, 2)), Some(Cell::Affected));
//! ```
//!
//! A [`Board`] is a plain owned value. Callers that share one between threads must hold
//! a single lock across each `can_place`/`place` pair.

pub mod abilities;
pub mod board;
pub mod render;
pub mod ships;

pub use crate::{
    abilities::{AbilityShape, Mask},
    board::{Board, CannotPlaceReason, Cell, Coordinate, PlaceError, Placement},
    render::BoardDisplay,
    ships::{Orientation, Orientations, Ship},
};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 10;

/// Number of cells covered by a ship.
pub const SHIP_LEN: usize = 3;

/// Width and height of an ability mask. Odd, so the mask has a center cell.
pub const MASK_SIZE: usize = 5;
