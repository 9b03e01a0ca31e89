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

//! Errors used by the [`Grid`][crate::board::Grid].

use thiserror::Error;

use crate::{board::Coordinate, ships::ShipId};

/// Reason why a ship could not be projected onto a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotProjectReason {
    /// Part of the ship lies outside the grid.
    #[error("the ship extends past the edge of the grid")]
    OutOfBounds,
    /// One or more of the ship's cells was already occupied by another ship.
    #[error("the ship overlaps a ship that was already projected")]
    AlreadyOccupied,
}

/// Error caused when attempting to project a ship onto a grid.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not project ship {ship} at {coord:?}: {reason}")]
pub struct ProjectError {
    #[source]
    reason: CannotProjectReason,
    ship: ShipId,
    coord: Coordinate,
}

impl ProjectError {
    /// Construct a projection error for the given ship, at the first offending cell.
    pub(super) fn new(reason: CannotProjectReason, ship: ShipId, coord: Coordinate) -> Self {
        Self {
            reason,
            ship,
            coord,
        }
    }

    /// Get the reason projection was aborted.
    pub fn reason(&self) -> CannotProjectReason {
        self.reason
    }

    /// Id of the ship that could not be projected.
    pub fn ship(&self) -> ShipId {
        self.ship
    }

    /// The first cell of the ship that could not be marked.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
