// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::{board::Coordinate, ships::Orientation, SHIP_LEN};

/// Cells covered by a ship, starting at its origin and stepping outwards along its
/// orientation.
pub type ShapeProjection = [Coordinate; SHIP_LEN];

/// Project a ship from `origin` along `orientation`. Cell `i` of the projection is
/// `origin + i * orientation.delta()`.
///
/// Does not check the board's bounds or occupancy. Returns `None` only if the arithmetic
/// overflows, which can never be a position on the board.
pub fn project(origin: Coordinate, orientation: Orientation) -> Option<ShapeProjection> {
    let (row_delta, col_delta) = orientation.delta();
    let mut proj = [origin; SHIP_LEN];
    let mut previous = origin;
    for slot in proj.iter_mut().skip(1) {
        previous = previous.offset(row_delta, col_delta)?;
        *slot = previous;
    }
    Some(proj)
}
