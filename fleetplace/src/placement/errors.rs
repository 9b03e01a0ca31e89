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

//! Errors returned by the [`Placer`][crate::Placer].

use thiserror::Error;

use crate::ships::ShipId;

/// Reason why a fleet configuration was rejected before placement started.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// A ship type has length 0.
    #[error("ship type {name:?} has zero length")]
    ZeroLength { name: String },

    /// A ship type is too long to fit on the grid under the active edge rule.
    #[error("ship type {name:?} has length {length}, but at most {max} fits on the grid")]
    TooLong {
        name: String,
        length: usize,
        max: usize,
    },

    /// The whole fleet covers more cells than the grid has.
    #[error("the fleet covers {cells} cells, but the grid only has {capacity}")]
    FleetTooLarge { cells: usize, capacity: usize },
}

/// Error returned when a fleet could not be placed.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum PlacementError {
    /// The ship type configuration can never be placed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    /// Collision resolution gave up on a ship after reaching the attempt limit.
    #[error("no free position found for ship {id} after {attempts} attempts")]
    PlacementFailed { id: ShipId, attempts: usize },

    /// The collision test settled two ships that still share a cell.
    #[error("ships {a} and {b} overlap after collision resolution")]
    Overlap { a: ShipId, b: ShipId },
}
