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

//! Types used for defining ship types and placed ships.
use std::iter::FromIterator;

use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::Serialize;

use crate::board::Coordinate;

pub use self::orientation::{Direction, Orientation};

mod orientation;

/// Ids are handed out sequentially, starting at 0, in generation order.
pub type ShipId = usize;

/// Configuration for one kind of ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipTypeSpec {
    /// Number of cells the ship covers.
    pub length: usize,
    /// Character shown in each cell the ship covers.
    pub code: char,
    /// How many ships of this type make up the fleet.
    pub quantity: usize,
}

impl ShipTypeSpec {
    pub const fn new(length: usize, code: char, quantity: usize) -> Self {
        Self {
            length,
            code,
            quantity,
        }
    }
}

/// Ordered mapping of ship type name to [`ShipTypeSpec`]. Ships are generated in the
/// order types were inserted, which together with the random stream decides the outcome
/// of placement.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShipTypes {
    entries: Vec<(String, ShipTypeSpec)>,
}

impl ShipTypes {
    /// Create an empty set of ship types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ship type, builder style. Replaces an existing type of the same name in place.
    pub fn with(mut self, name: impl Into<String>, spec: ShipTypeSpec) -> Self {
        self.insert(name, spec);
        self
    }

    /// Insert a ship type. If the name was already present, its spec is replaced without
    /// changing its position in the order and the old spec is returned.
    pub fn insert(&mut self, name: impl Into<String>, spec: ShipTypeSpec) -> Option<ShipTypeSpec> {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => Some(std::mem::replace(existing, spec)),
            None => {
                self.entries.push((name, spec));
                None
            }
        }
    }

    /// Look up the spec for the named ship type.
    pub fn get(&self, name: &str) -> Option<&ShipTypeSpec> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, spec)| spec)
    }

    /// Iterate the ship types in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShipTypeSpec)> {
        self.entries.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    /// Number of distinct ship types.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of ships across all types.
    pub fn total_ships(&self) -> usize {
        self.entries.iter().map(|(_, spec)| spec.quantity).sum()
    }

    /// Total number of cells the whole fleet covers.
    pub fn total_cells(&self) -> usize {
        self.entries
            .iter()
            .map(|(_, spec)| spec.length.saturating_mul(spec.quantity))
            .fold(0, usize::saturating_add)
    }
}

impl<N: Into<String>> FromIterator<(N, ShipTypeSpec)> for ShipTypes {
    fn from_iter<T: IntoIterator<Item = (N, ShipTypeSpec)>>(iter: T) -> Self {
        let mut types = ShipTypes::new();
        for (name, spec) in iter {
            types.insert(name, spec);
        }
        types
    }
}

/// The standard fleet: 9 ships covering 27 cells.
pub static DEFAULT_SHIP_TYPES: Lazy<ShipTypes> = Lazy::new(|| {
    ShipTypes::new()
        .with("carrier", ShipTypeSpec::new(5, 'A', 1))
        .with("battleship", ShipTypeSpec::new(4, 'B', 1))
        .with("cruiser", ShipTypeSpec::new(3, 'C', 2))
        .with("submarine", ShipTypeSpec::new(3, 'S', 2))
        .with("patrol", ShipTypeSpec::new(2, 'P', 3))
});

#[cfg(feature = "serde")]
mod serde_impls {
    use std::fmt;

    use serde::{
        de::{self, MapAccess, Visitor},
        ser::SerializeMap,
        Deserialize, Deserializer, Serialize, Serializer,
    };

    use super::{ShipTypeSpec, ShipTypes};

    impl Serialize for ShipTypes {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, spec) in self.iter() {
                map.serialize_entry(name, spec)?;
            }
            map.end()
        }
    }

    /// Reads a map in document order so the generation order matches the file.
    struct ShipTypesVisitor;

    impl<'de> Visitor<'de> for ShipTypesVisitor {
        type Value = ShipTypes;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of ship type names to ship type specs")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<ShipTypes, A::Error> {
            let mut types = ShipTypes::new();
            while let Some((name, spec)) = access.next_entry::<String, ShipTypeSpec>()? {
                if types.get(&name).is_some() {
                    return Err(de::Error::custom(format!(
                        "duplicate ship type {:?}",
                        name
                    )));
                }
                types.insert(name, spec);
            }
            Ok(types)
        }
    }

    impl<'de> Deserialize<'de> for ShipTypes {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ShipTypes, D::Error> {
            deserializer.deserialize_map(ShipTypesVisitor)
        }
    }
}

/// A ship placed on the board. Only the position changes after creation, and only
/// while the [`Placer`][crate::Placer] is resolving collisions.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Ship {
    id: ShipId,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    ship_type: String,
    code: char,
    length: usize,
    orientation: Orientation,
    position: Coordinate,
}

impl Ship {
    /// Create a ship of the given type at `position`, which is its top-left cell.
    pub fn new(
        id: ShipId,
        ship_type: impl Into<String>,
        spec: &ShipTypeSpec,
        orientation: Orientation,
        position: Coordinate,
    ) -> Self {
        Self {
            id,
            ship_type: ship_type.into(),
            code: spec.code,
            length: spec.length,
            orientation,
            position,
        }
    }

    pub fn id(&self) -> ShipId {
        self.id
    }

    /// Name of the ship type this ship was generated from.
    pub fn ship_type(&self) -> &str {
        &self.ship_type
    }

    pub fn code(&self) -> char {
        self.code
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Top-left cell of the ship.
    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub(crate) fn set_position(&mut self, position: Coordinate) {
        self.position = position;
    }

    /// Width and height covered by the ship.
    pub fn footprint(&self) -> (usize, usize) {
        self.orientation.footprint(self.length)
    }

    /// One past the bottom-right cell of the ship, on both axes.
    pub fn end(&self) -> Coordinate {
        let (w, h) = self.footprint();
        Coordinate::new(self.position.x + w, self.position.y + h)
    }

    /// Iterate the cells covered by this ship, starting from its position.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> {
        let Coordinate { x, y } = self.position;
        let orientation = self.orientation;
        (0..self.length).map(move |i| match orientation {
            Orientation::Horizontal => Coordinate::new(x + i, y),
            Orientation::Vertical => Coordinate::new(x, y + i),
        })
    }

    /// Whether this ship covers the given cell.
    pub fn covers(&self, coord: Coordinate) -> bool {
        let end = self.end();
        (self.position.x..end.x).contains(&coord.x) && (self.position.y..end.y).contains(&coord.y)
    }
}
