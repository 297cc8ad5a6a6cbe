//! Validating and committing ship placements.

use log::debug;

use crate::{
    board::{Board, CannotPlaceReason, Cell, Coordinate, PlaceError},
    ships::{project, Orientation, Orientations, ShapeProjection, Ship},
};

/// Record of a ship committed to the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Placement {
    origin: Coordinate,
    orientation: Orientation,
    cells: ShapeProjection,
}

impl Placement {
    /// Get the coordinate where this placement starts.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Get the direction the ship extends from its origin.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Get the cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> &ShapeProjection {
        &self.cells
    }
}

impl Board {
    /// Check if a ship could be placed starting at `origin` and extending along
    /// `orientation`, without modifying the board.
    ///
    /// Returns `false` if any cell the ship would cover lies off the board or is already
    /// part of another ship. Origins anywhere in the integer plane are accepted.
    pub fn can_place(&self, origin: Coordinate, orientation: Orientation) -> bool {
        self.validate(origin, orientation).is_ok()
    }

    /// Like [`can_place`][Board::can_place], but reports why the placement is invalid.
    pub fn check_placement(
        &self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        self.validate(origin, orientation).map(|_| ())
    }

    /// Get the set of orientations a ship could currently be placed in from `origin`.
    /// Empty if the origin is off the board.
    pub fn placements_at(&self, origin: Coordinate) -> Orientations {
        let mut valid = Orientations::empty();
        for &orientation in Orientation::ALL {
            if self.can_place(origin, orientation) {
                valid.insert(orientation);
            }
        }
        valid
    }

    /// Copy the ship's markers onto the cells starting at `origin` along `orientation`.
    ///
    /// The caller must have confirmed the placement with [`can_place`][Board::can_place]
    /// against the board as it is now; this is not re-checked in release builds. Cells
    /// that would fall off the board are skipped.
    pub fn place(&mut self, ship: &Ship, origin: Coordinate, orientation: Orientation) {
        debug_assert!(
            self.can_place(origin, orientation),
            "place called for an invalid placement at {} facing {:?}",
            origin,
            orientation,
        );
        let cells = match project(origin, orientation) {
            Some(cells) => cells,
            None => return,
        };
        for (coord, &marker) in cells.iter().zip(ship.markers().iter()) {
            if let Some(cell) = self.grid.get_mut(coord) {
                *cell = marker;
            }
        }
        debug!("placed ship at {} facing {}", origin, orientation);
        self.placements.push(Placement {
            origin,
            orientation,
            cells,
        });
    }

    /// Validate and place the ship in one step. On failure the board is unchanged.
    pub fn try_place(
        &mut self,
        ship: &Ship,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        self.check_placement(origin, orientation)?;
        self.place(ship, origin, orientation);
        Ok(())
    }

    /// Project the ship and check every covered cell. All cells are bounds-checked before
    /// any is checked for occupancy.
    fn validate(
        &self,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<ShapeProjection, PlaceError> {
        let reject = |reason: CannotPlaceReason| {
            debug!(
                "rejected ship at {} facing {}: {}",
                origin, orientation, reason
            );
            PlaceError::new(reason, origin, orientation)
        };
        let cells =
            project(origin, orientation).ok_or_else(|| reject(CannotPlaceReason::OutOfBounds))?;
        if !cells.iter().all(|coord| self.grid.get(coord).is_some()) {
            return Err(reject(CannotPlaceReason::OutOfBounds));
        }
        if cells.iter().any(|coord| self.grid[coord] != Cell::Empty) {
            return Err(reject(CannotPlaceReason::AlreadyOccupied));
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SHIP_LEN;

    fn placed(origin: (isize, isize), orientation: Orientation) -> Board {
        let mut board = Board::new();
        board
            .try_place(&Ship::new(), origin.into(), orientation)
            .unwrap();
        board
    }

    #[test]
    fn horizontal_fits_up_to_the_right_edge() {
        let board = Board::new();
        assert!(board.can_place(Coordinate::new(0, 7), Orientation::Horizontal));
        assert!(!board.can_place(Coordinate::new(0, 8), Orientation::Horizontal));
    }

    #[test]
    fn up_right_checks_the_top_edge() {
        let board = Board::new();
        assert!(board.can_place(Coordinate::new(2, 0), Orientation::DiagonalUpRight));
        assert!(!board.can_place(Coordinate::new(1, 0), Orientation::DiagonalUpRight));
        assert!(!board.can_place(Coordinate::new(9, 8), Orientation::DiagonalUpRight));
    }

    #[test]
    fn down_right_checks_both_edges() {
        let board = Board::new();
        assert!(board.can_place(Coordinate::new(7, 7), Orientation::DiagonalDownRight));
        assert!(!board.can_place(Coordinate::new(8, 0), Orientation::DiagonalDownRight));
        assert!(!board.can_place(Coordinate::new(0, 8), Orientation::DiagonalDownRight));
    }

    #[test]
    fn origin_off_board_is_rejected() {
        let board = Board::new();
        for &orientation in Orientation::ALL {
            let err = board
                .check_placement(Coordinate::new(-1, 3), orientation)
                .unwrap_err();
            assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
            assert_eq!(err.origin(), Coordinate::new(-1, 3));
            assert_eq!(err.orientation(), orientation);
        }
    }

    #[test]
    fn overlap_reports_occupied() {
        let board = placed((2, 1), Orientation::Horizontal);
        let err = board
            .check_placement(Coordinate::new(0, 2), Orientation::Vertical)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    }

    #[test]
    fn bounds_are_reported_before_overlap() {
        let board = placed((9, 7), Orientation::Horizontal);
        let err = board
            .check_placement(Coordinate::new(9, 8), Orientation::Horizontal)
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    }

    #[test]
    fn diagonals_can_cross() {
        let board = placed((0, 0), Orientation::DiagonalDownRight);
        // (2,0),(1,1),(0,2) shares (1,1).
        assert!(!board.can_place(Coordinate::new(2, 0), Orientation::DiagonalUpRight));
        // (3,0),(2,1),(1,2) crosses the line without sharing a cell.
        assert!(board.can_place(Coordinate::new(3, 0), Orientation::DiagonalUpRight));
    }

    #[test]
    fn place_records_placement() {
        let board = placed((9, 0), Orientation::DiagonalUpRight);
        let placements: Vec<_> = board.iter_placements().collect();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].origin(), Coordinate::new(9, 0));
        assert_eq!(placements[0].orientation(), Orientation::DiagonalUpRight);
        assert_eq!(
            placements[0].cells(),
            &[
                Coordinate::new(9, 0),
                Coordinate::new(8, 1),
                Coordinate::new(7, 2)
            ]
        );
        assert_eq!(board.count(Cell::Occupied), SHIP_LEN);
    }

    #[test]
    fn failed_try_place_leaves_board_untouched() {
        let mut board = placed((5, 5), Orientation::Vertical);
        let before = board.clone();
        assert!(board
            .try_place(&Ship::new(), Coordinate::new(6, 4), Orientation::Horizontal)
            .is_err());
        assert_eq!(board, before);
        assert_eq!(board.iter_placements().count(), 1);
    }

    #[test]
    fn placements_at_lists_legal_orientations() {
        let board = Board::new();
        assert_eq!(
            board.placements_at(Coordinate::new(0, 0)),
            Orientation::Horizontal | Orientation::Vertical | Orientation::DiagonalDownRight
        );
        assert_eq!(
            board.placements_at(Coordinate::new(9, 9)),
            Orientations::empty()
        );
        assert_eq!(
            board.placements_at(Coordinate::new(9, 0)),
            Orientation::Horizontal | Orientation::DiagonalUpRight
        );
        assert!(board.placements_at(Coordinate::new(10, 0)).is_empty());
    }
}
