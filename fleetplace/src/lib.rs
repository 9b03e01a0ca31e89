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

//! Random fleet placement for a classic 10x10 Battleship grid.
//!
//! The [`Placer`] scatters a configured fleet across the grid, then nudges colliding
//! ships around until every ship has a space of its own. The resulting [`Ship`]s can be
//! projected onto a [`Grid`] of cell states for rendering.
//!
//! ```
//! use fleetplace::{place_ships, Grid, DEFAULT_SHIP_TYPES};
//!
//! let ships = place_ships(&DEFAULT_SHIP_TYPES).unwrap();
//! assert_eq!(ships.len(), 9);
//! let grid = Grid::from_ships(&ships).unwrap();
//! assert_eq!(grid.count_ship_cells(), 27);
//! ```

pub mod board;
pub mod game;
pub mod placement;
pub mod ships;

pub use crate::{
    board::{
        CannotProjectReason, Cell, CellState, Coordinate, Grid, ProjectError, Vector, GRID_SIZE,
    },
    game::{Game, GameError},
    placement::{
        place_ships, CollisionTest, ConfigError, EdgeRule, PlacementError, Placer, PlacerConfig,
    },
    ships::{Direction, Orientation, Ship, ShipId, ShipTypeSpec, ShipTypes, DEFAULT_SHIP_TYPES},
};
