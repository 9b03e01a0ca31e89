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

use std::collections::HashSet;

use fleetplace::{
    CollisionTest, Coordinate, EdgeRule, Grid, Orientation, Placer, PlacerConfig, Ship,
    ShipTypeSpec, ShipTypes, DEFAULT_SHIP_TYPES, GRID_SIZE,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

/// Cells covered by a ship, computed without going through the crate's own helpers.
fn occupied(ship: &Ship) -> Vec<(usize, usize)> {
    let Coordinate { x, y } = ship.position();
    (0..ship.length())
        .map(|i| match ship.orientation() {
            Orientation::Horizontal => (x + i, y),
            Orientation::Vertical => (x, y + i),
        })
        .collect()
}

/// Small fleets covering at most a third of the grid, so placement always has room.
fn small_fleet() -> impl Strategy<Value = ShipTypes> {
    prop::collection::vec((1..=5usize, 0..=3usize), 1..=4)
        .prop_filter("fleet too dense", |types| {
            types.iter().map(|(len, qty)| len * qty).sum::<usize>() <= 33
        })
        .prop_map(|types| {
            types
                .into_iter()
                .enumerate()
                .map(|(i, (length, quantity))| {
                    let code = (b'A' + i as u8) as char;
                    (format!("type{}", i), ShipTypeSpec::new(length, code, quantity))
                })
                .collect::<ShipTypes>()
        })
}

fn edge_rule() -> impl Strategy<Value = EdgeRule> {
    prop_oneof![Just(EdgeRule::Strict), Just(EdgeRule::Legacy)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: no two ships share a cell and every cell is on the grid.
    #[test]
    fn default_fleet_is_disjoint_and_in_bounds(seed in any::<u64>(), edges in edge_rule()) {
        let placer = Placer::new(PlacerConfig::new().edges(edges));
        let ships = placer
            .place_ships(&mut StdRng::seed_from_u64(seed), &DEFAULT_SHIP_TYPES)
            .unwrap();

        let mut seen = HashSet::new();
        for ship in &ships {
            for (x, y) in occupied(ship) {
                prop_assert!(x < GRID_SIZE && y < GRID_SIZE, "ship {} off grid at ({}, {})", ship.id(), x, y);
                prop_assert!(seen.insert((x, y)), "cell ({}, {}) covered twice", x, y);
            }
        }
        prop_assert_eq!(seen.len(), 27);
    }

    /// Property: the bounding-box test leaves a fleet just as clean as the exact test.
    #[test]
    fn bounding_box_fleet_is_disjoint(seed in any::<u64>()) {
        let placer = Placer::new(PlacerConfig::new().collision(CollisionTest::BoundingBox));
        let ships = placer
            .place_ships(&mut StdRng::seed_from_u64(seed), &DEFAULT_SHIP_TYPES)
            .unwrap();
        prop_assert!(Grid::from_ships(&ships).is_ok());
    }

    /// Property: the fleet has exactly the configured ships, with ids 0..n in order.
    #[test]
    fn counts_and_ids_match_config(seed in any::<u64>(), types in small_fleet()) {
        let ships = Placer::default()
            .place_ships(&mut StdRng::seed_from_u64(seed), &types)
            .unwrap();

        prop_assert_eq!(ships.len(), types.total_ships());
        let ids: Vec<_> = ships.iter().map(|ship| ship.id()).collect();
        prop_assert_eq!(ids, (0..types.total_ships()).collect::<Vec<_>>());

        for (name, spec) in types.iter() {
            let of_type: Vec<_> = ships.iter().filter(|ship| ship.ship_type() == name).collect();
            prop_assert_eq!(of_type.len(), spec.quantity);
            for ship in of_type {
                prop_assert_eq!(ship.length(), spec.length);
                prop_assert_eq!(ship.code(), spec.code);
            }
        }
        let grid = Grid::from_ships(&ships).unwrap();
        prop_assert_eq!(grid.count_ship_cells(), types.total_cells());
    }

    /// Property: identical seeds give identical fleets.
    #[test]
    fn placement_is_deterministic(seed in any::<u64>(), types in small_fleet()) {
        let placer = Placer::default();
        let first = placer.place_ships(&mut StdRng::seed_from_u64(seed), &types).unwrap();
        let second = placer.place_ships(&mut StdRng::seed_from_u64(seed), &types).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: projecting the same fleet twice gives the same grid.
    #[test]
    fn projection_is_repeatable(seed in any::<u64>()) {
        let ships = Placer::default()
            .place_ships(&mut StdRng::seed_from_u64(seed), &DEFAULT_SHIP_TYPES)
            .unwrap();
        prop_assert_eq!(Grid::from_ships(&ships).unwrap(), Grid::from_ships(&ships).unwrap());
    }

    /// Property: for straight ships the bounding-box test agrees with exact overlap.
    #[test]
    fn bounding_box_matches_exact(
        a_len in 1..=GRID_SIZE,
        b_len in 1..=GRID_SIZE,
        a_horizontal in any::<bool>(),
        b_horizontal in any::<bool>(),
        a_pos in (0..GRID_SIZE, 0..GRID_SIZE),
        b_pos in (0..GRID_SIZE, 0..GRID_SIZE),
    ) {
        let orient = |h: bool| if h { Orientation::Horizontal } else { Orientation::Vertical };
        let a = Ship::new(0, "a", &ShipTypeSpec::new(a_len, 'a', 1), orient(a_horizontal), a_pos.into());
        let b = Ship::new(1, "b", &ShipTypeSpec::new(b_len, 'b', 1), orient(b_horizontal), b_pos.into());

        let a_cells: HashSet<_> = occupied(&a).into_iter().collect();
        let shares_cell = occupied(&b).iter().any(|cell| a_cells.contains(cell));
        prop_assert_eq!(CollisionTest::Exact.collides(&a, &b), shares_cell);
        prop_assert_eq!(CollisionTest::BoundingBox.collides(&a, &b), shares_cell);
    }
}
