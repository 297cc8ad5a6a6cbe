//! Projecting ability masks onto the board.

use log::{debug, trace};

use crate::{
    abilities::Mask,
    board::{Board, Cell, Coordinate},
};

impl Board {
    /// Center `mask` on `origin` and mark every covered cell [`Cell::Affected`].
    ///
    /// Mask cells that land off the board are skipped. Cells that are part of a ship stay
    /// [`Cell::Occupied`]. Because of both rules the result does not depend on the order
    /// overlays are applied in, and applying the same overlay twice changes nothing.
    pub fn overlay(&mut self, mask: &Mask, origin: Coordinate) {
        let mut marked = 0;
        let mut clipped = 0;
        let mut shielded = 0;
        for (row_delta, col_delta) in mask.iter_offsets() {
            let target = match origin.offset(row_delta, col_delta) {
                Some(coord) => self.grid.get_mut(&coord),
                None => None,
            };
            let cell = match target {
                Some(cell) => cell,
                None => {
                    trace!(
                        "clipped mask cell ({},{}) from {}",
                        row_delta,
                        col_delta,
                        origin
                    );
                    clipped += 1;
                    continue;
                }
            };
            match *cell {
                Cell::Occupied => shielded += 1,
                Cell::Empty | Cell::Affected => {
                    *cell = Cell::Affected;
                    marked += 1;
                }
            }
        }
        debug!(
            "overlay at {}: {} marked, {} clipped, {} shielded by ships",
            origin, marked, clipped, shielded
        );
    }
}
