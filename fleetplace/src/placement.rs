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

//! Random placement of a whole fleet.
//!
//! Placement runs in two phases. First every ship gets a random orientation and a random
//! position that keeps it on the grid. Then, in id order, each ship that collides with any
//! other is nudged by a random distance in a random cardinal direction until it no longer
//! collides. Nudges that would push the ship off the grid are discarded.
use log::{debug, trace, warn};
use rand::Rng;

use crate::{
    board::{Coordinate, Vector, GRID_SIZE},
    ships::{Direction, Orientation, Ship, ShipTypes},
};

pub use self::{
    collision::{overlaps, CollisionTest},
    errors::{ConfigError, PlacementError},
};

mod collision;
mod errors;

/// Default cap on nudge attempts for a single ship.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Controls how close to the far edges of the grid ships may be placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EdgeRule {
    /// Ships may occupy every cell of the grid.
    Strict,
    /// Reproduces the classic generator, which keeps ships off the last column
    /// (horizontal) or row (vertical) when first scattered, and refuses nudges that
    /// would bring a ship's end onto the far edge.
    Legacy,
}

impl EdgeRule {
    /// Longest ship that can be placed under this rule.
    pub fn max_length(self) -> usize {
        match self {
            EdgeRule::Strict => GRID_SIZE,
            EdgeRule::Legacy => GRID_SIZE - 1,
        }
    }

    /// Number of starting positions along the length axis for a ship of `length`.
    /// `length` must not exceed [`EdgeRule::max_length`].
    fn start_positions(self, length: usize) -> usize {
        match self {
            EdgeRule::Strict => GRID_SIZE - length + 1,
            EdgeRule::Legacy => GRID_SIZE - length,
        }
    }

    /// Whether a ship whose exclusive end on some axis is `end` is on the grid.
    fn end_fits(self, end: usize) -> bool {
        match self {
            EdgeRule::Strict => end <= GRID_SIZE,
            EdgeRule::Legacy => end < GRID_SIZE,
        }
    }
}

impl Default for EdgeRule {
    fn default() -> Self {
        EdgeRule::Strict
    }
}

/// Settings for a [`Placer`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct PlacerConfig {
    collision: CollisionTest,
    edges: EdgeRule,
    max_attempts: Option<usize>,
}

impl PlacerConfig {
    /// Create a config with exact collisions, strict edges and the default attempt cap.
    pub fn new() -> Self {
        Self {
            collision: CollisionTest::default(),
            edges: EdgeRule::default(),
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
        }
    }

    /// Set the collision test.
    pub fn collision(mut self, collision: CollisionTest) -> Self {
        self.collision = collision;
        self
    }

    /// Set the edge rule.
    pub fn edges(mut self, edges: EdgeRule) -> Self {
        self.edges = edges;
        self
    }

    /// Set the per-ship cap on nudge attempts. `None` lets resolution run until it
    /// succeeds, which never returns for a fleet that cannot be untangled.
    pub fn max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn get_collision(&self) -> CollisionTest {
        self.collision
    }

    pub fn get_edges(&self) -> EdgeRule {
        self.edges
    }

    pub fn get_max_attempts(&self) -> Option<usize> {
        self.max_attempts
    }
}

impl Default for PlacerConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Places fleets on the grid. Holds no state between calls, so one placer can be reused
/// for any number of fleets.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Placer {
    config: PlacerConfig,
}

impl Placer {
    pub fn new(config: PlacerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlacerConfig {
        &self.config
    }

    /// Place every ship described by `ship_types`. Ships are returned in id order. The
    /// result only depends on `ship_types` and the values drawn from `rng`.
    pub fn place_ships(
        &self,
        rng: &mut impl Rng,
        ship_types: &ShipTypes,
    ) -> Result<Vec<Ship>, PlacementError> {
        let mut ships = self.generate(rng, ship_types)?;
        self.resolve(rng, &mut ships)?;
        if self.config.collision != CollisionTest::Exact {
            self.check_overlaps(&ships)?;
        }
        Ok(ships)
    }

    /// Check that no two ships share a cell, regardless of the configured collision test.
    /// Reports the first overlapping pair in id order.
    pub fn check_overlaps(&self, ships: &[Ship]) -> Result<(), PlacementError> {
        for (idx, a) in ships.iter().enumerate() {
            if let Some(b) = ships[idx + 1..].iter().find(|b| overlaps(a, b)) {
                warn!(
                    "{:?} collision test left ships {} and {} overlapping",
                    self.config.collision,
                    a.id(),
                    b.id()
                );
                return Err(PlacementError::Overlap {
                    a: a.id(),
                    b: b.id(),
                });
            }
        }
        Ok(())
    }

    /// Check that every ship type can be placed under this placer's edge rule and that
    /// the fleet fits in the grid.
    pub fn validate(&self, ship_types: &ShipTypes) -> Result<(), ConfigError> {
        let max = self.config.edges.max_length();
        for (name, spec) in ship_types.iter() {
            if spec.length == 0 {
                return Err(ConfigError::ZeroLength { name: name.into() });
            }
            if spec.length > max {
                return Err(ConfigError::TooLong {
                    name: name.into(),
                    length: spec.length,
                    max,
                });
            }
        }
        let cells = ship_types.total_cells();
        let capacity = GRID_SIZE * GRID_SIZE;
        if cells > capacity {
            return Err(ConfigError::FleetTooLarge { cells, capacity });
        }
        Ok(())
    }

    /// Create the ships for `ship_types` at random orientations and positions, without
    /// looking at collisions.
    pub fn generate(
        &self,
        rng: &mut impl Rng,
        ship_types: &ShipTypes,
    ) -> Result<Vec<Ship>, PlacementError> {
        self.validate(ship_types)?;
        let mut ships = Vec::with_capacity(ship_types.total_ships());
        for (name, spec) in ship_types.iter() {
            for _ in 0..spec.quantity {
                let orientation: Orientation = rng.gen();
                let starts = self.config.edges.start_positions(spec.length);
                // x is always drawn before y.
                let position = match orientation {
                    Orientation::Horizontal => {
                        let x = rng.gen_range(0, starts);
                        Coordinate::new(x, rng.gen_range(0, GRID_SIZE))
                    }
                    Orientation::Vertical => {
                        let x = rng.gen_range(0, GRID_SIZE);
                        Coordinate::new(x, rng.gen_range(0, starts))
                    }
                };
                ships.push(Ship::new(ships.len(), name, spec, orientation, position));
            }
        }
        debug!("generated {} ships", ships.len());
        Ok(ships)
    }

    /// Nudge ships, in order, until none collides with any other. A settled ship is never
    /// moved again, so later ships have to find room around it.
    pub fn resolve(&self, rng: &mut impl Rng, ships: &mut [Ship]) -> Result<(), PlacementError> {
        for idx in 0..ships.len() {
            let mut attempts = 0;
            while self.collides_with_any(idx, ships) {
                if let Some(max) = self.config.max_attempts {
                    if attempts >= max {
                        warn!(
                            "giving up on ship {} after {} attempts",
                            ships[idx].id(),
                            attempts
                        );
                        return Err(PlacementError::PlacementFailed {
                            id: ships[idx].id(),
                            attempts,
                        });
                    }
                }
                attempts += 1;

                let direction: Direction = rng.gen();
                // GRID_SIZE is small, so the cast cannot wrap.
                let magnitude = rng.gen_range(0, GRID_SIZE) as isize;
                let nudge = direction.unit() * magnitude;
                match self.moved(&ships[idx], nudge) {
                    Some(position) => {
                        trace!("ship {} nudged {:?} to {:?}", ships[idx].id(), nudge, position);
                        ships[idx].set_position(position);
                    }
                    None => trace!("ship {} cannot move by {:?}", ships[idx].id(), nudge),
                }
            }
            debug!(
                "ship {} settled at {:?} after {} attempts",
                ships[idx].id(),
                ships[idx].position(),
                attempts
            );
        }
        Ok(())
    }

    /// Check whether two ships collide under this placer's collision test.
    pub fn collides(&self, a: &Ship, b: &Ship) -> bool {
        self.config.collision.collides(a, b)
    }

    /// Check whether moving `ship` by `vector` keeps all of it on the grid.
    pub fn is_movement_valid(&self, ship: &Ship, vector: Vector) -> bool {
        self.moved(ship, vector).is_some()
    }

    /// Position of `ship` after moving by `vector`, if it stays on the grid.
    fn moved(&self, ship: &Ship, vector: Vector) -> Option<Coordinate> {
        let position = ship.position().offset(vector)?;
        let (w, h) = ship.footprint();
        let edges = self.config.edges;
        if edges.end_fits(position.x + w) && edges.end_fits(position.y + h) {
            Some(position)
        } else {
            None
        }
    }

    fn collides_with_any(&self, idx: usize, ships: &[Ship]) -> bool {
        let ship = &ships[idx];
        ships
            .iter()
            .enumerate()
            .any(|(other_idx, other)| other_idx != idx && self.collides(ship, other))
    }
}

/// Place `ship_types` with the default [`Placer`] and the thread-local random number
/// generator.
pub fn place_ships(ship_types: &ShipTypes) -> Result<Vec<Ship>, PlacementError> {
    Placer::default().place_ships(&mut rand::thread_rng(), ship_types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::ShipTypeSpec;

    fn ship(length: usize, orientation: Orientation, x: usize, y: usize) -> Ship {
        let spec = ShipTypeSpec::new(length, 'X', 1);
        Ship::new(0, "test", &spec, orientation, Coordinate::new(x, y))
    }

    fn legacy() -> Placer {
        Placer::new(PlacerConfig::new().edges(EdgeRule::Legacy))
    }

    #[test]
    fn strict_movement() {
        let placer = Placer::default();
        let carrier = ship(5, Orientation::Horizontal, 3, 9);
        assert!(placer.is_movement_valid(&carrier, Vector::new(2, 0)));
        assert!(!placer.is_movement_valid(&carrier, Vector::new(3, 0)));
        assert!(placer.is_movement_valid(&carrier, Vector::new(-3, 0)));
        assert!(!placer.is_movement_valid(&carrier, Vector::new(-4, 0)));
        assert!(!placer.is_movement_valid(&carrier, Vector::new(0, 1)));
        assert!(placer.is_movement_valid(&carrier, Vector::new(0, -9)));
        assert!(placer.is_movement_valid(&carrier, Vector::new(0, 0)));
    }

    #[test]
    fn legacy_movement() {
        let placer = legacy();
        let cruiser = ship(3, Orientation::Vertical, 0, 0);
        // End row 9 is still allowed, end row 10 is not.
        assert!(placer.is_movement_valid(&cruiser, Vector::new(0, 6)));
        assert!(!placer.is_movement_valid(&cruiser, Vector::new(0, 7)));
        // The last column is off limits across the ship too.
        assert!(placer.is_movement_valid(&cruiser, Vector::new(8, 0)));
        assert!(!placer.is_movement_valid(&cruiser, Vector::new(9, 0)));
    }

    #[test]
    fn max_length_per_rule() {
        let full_row = ShipTypes::new().with("long", ShipTypeSpec::new(GRID_SIZE, 'L', 1));
        assert_eq!(Placer::default().validate(&full_row), Ok(()));
        assert_eq!(
            legacy().validate(&full_row),
            Err(ConfigError::TooLong {
                name: "long".into(),
                length: GRID_SIZE,
                max: GRID_SIZE - 1,
            })
        );
    }

    #[test]
    fn zero_quantity_types_are_skipped() {
        let types = ShipTypes::new()
            .with("none", ShipTypeSpec::new(3, 'N', 0))
            .with("one", ShipTypeSpec::new(2, 'O', 1));
        let ships = Placer::default()
            .place_ships(&mut rand::thread_rng(), &types)
            .unwrap();
        assert_eq!(ships.len(), 1);
        assert_eq!(ships[0].ship_type(), "one");
        assert_eq!(ships[0].id(), 0);
    }

    #[test]
    fn overlap_check_catches_end_to_end_ships() {
        let placer = Placer::new(PlacerConfig::new().collision(CollisionTest::Span));
        let ships = vec![
            ship(5, Orientation::Horizontal, 0, 0),
            Ship::new(
                1,
                "test",
                &ShipTypeSpec::new(4, 'X', 1),
                Orientation::Horizontal,
                Coordinate::new(3, 0),
            ),
        ];
        assert!(!placer.collides(&ships[0], &ships[1]));
        assert_eq!(
            placer.check_overlaps(&ships),
            Err(PlacementError::Overlap { a: 0, b: 1 })
        );
    }

    #[test]
    fn overlap_check_accepts_disjoint_ships() {
        let ships = vec![
            ship(5, Orientation::Horizontal, 0, 0),
            ship(4, Orientation::Vertical, 0, 1),
        ];
        assert_eq!(Placer::default().check_overlaps(&ships), Ok(()));
    }

    #[test]
    fn empty_fleet() {
        let ships = place_ships(&ShipTypes::new()).unwrap();
        assert!(ships.is_empty());
    }
}
