//! Errors used by the [`Board`][crate::board::Board].

use thiserror::Error;

use crate::{board::Coordinate, ships::Orientation};

/// Reason why a ship could not be placed at a given position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// One or more of the cells the ship would cover lies off the board.
    #[error("the ship does not fit on the board")]
    OutOfBounds,
    /// One or more of the cells the ship would cover is already part of a ship.
    #[error("the requested position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship at {origin} facing {orientation:?}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    origin: Coordinate,
    orientation: Orientation,
}

impl PlaceError {
    /// Construct a placement error from a reason and the rejected placement.
    pub(super) fn new(reason: CannotPlaceReason, origin: Coordinate, orientation: Orientation) -> Self {
        Self {
            reason,
            origin,
            orientation,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the coordinate the ship was to start from.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Get the orientation the ship was to be placed along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
