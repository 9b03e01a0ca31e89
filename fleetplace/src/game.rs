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

//! A single player's view of the game: their own fleet and the grid they use to track
//! shots at the opponent.
use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::{
    board::{Grid, ProjectError},
    placement::{PlacementError, Placer},
    ships::{Ship, ShipTypes},
};

/// Reason why a [`Game`] could not be set up.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum GameError {
    /// The fleet could not be placed.
    #[error(transparent)]
    Placement(#[from] PlacementError),

    /// The fleet could not be drawn onto the primary grid. Only happens for fleets built
    /// by hand and passed to [`Game::from_ships`].
    #[error(transparent)]
    Projection(#[from] ProjectError),
}

/// A player's fleet, placed once at construction, and the two grids shown to them.
#[derive(Debug, Clone)]
pub struct Game {
    ships: Vec<Ship>,
    primary: Grid,
    tracking: Grid,
}

impl Game {
    /// Place a fleet for `ship_types` and project it onto the primary grid. The tracking
    /// grid starts out empty.
    pub fn new(
        rng: &mut impl Rng,
        placer: &Placer,
        ship_types: &ShipTypes,
    ) -> Result<Self, GameError> {
        let ships = placer.place_ships(rng, ship_types)?;
        Self::from_ships(ships)
    }

    /// Build a game from an already placed fleet.
    pub fn from_ships(ships: Vec<Ship>) -> Result<Self, GameError> {
        let primary = Grid::from_ships(&ships)?;
        debug!(
            "primary grid holds {} ships over {} cells",
            ships.len(),
            primary.count_ship_cells()
        );
        Ok(Self {
            ships,
            primary,
            tracking: Grid::new(),
        })
    }

    /// The placed fleet, in id order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Grid showing the player's own fleet.
    pub fn primary(&self) -> &Grid {
        &self.primary
    }

    pub fn primary_mut(&mut self) -> &mut Grid {
        &mut self.primary
    }

    /// Grid tracking shots fired at the opponent.
    pub fn tracking(&self) -> &Grid {
        &self.tracking
    }

    pub fn tracking_mut(&mut self) -> &mut Grid {
        &mut self.tracking
    }
}
