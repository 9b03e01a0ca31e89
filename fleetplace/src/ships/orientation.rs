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
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Vector;

/// Axis that a ship's length runs along.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Orientation {
    /// The ship extends downward from its position.
    Vertical,
    /// The ship extends to the right of its position.
    Horizontal,
}

impl Orientation {
    /// All orientations, in index order.
    pub const ALL: &'static [Orientation] = &[Orientation::Vertical, Orientation::Horizontal];

    /// Map a random index to an orientation. Index 0 is `Vertical`; indices past the end
    /// wrap around.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    /// Width and height covered by a ship of the given length in this orientation.
    pub fn footprint(self, length: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (length, 1),
            Orientation::Vertical => (1, length),
        }
    }
}

impl Distribution<Orientation> for Standard {
    /// Picks either orientation with equal probability.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Orientation {
        Orientation::from_index(rng.gen_range(0, Orientation::ALL.len()))
    }
}

/// Cardinal directions a ship may be nudged in. Up is toward `y = 0`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All directions, in index order.
    pub const ALL: &'static [Direction] = &[
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Map a random index to a direction, wrapping around past the end.
    pub fn from_index(idx: usize) -> Self {
        Self::ALL[idx % Self::ALL.len()]
    }

    /// Unit vector pointing in this direction.
    pub fn unit(self) -> Vector {
        match self {
            Direction::Up => Vector::new(0, -1),
            Direction::Right => Vector::new(1, 0),
            Direction::Down => Vector::new(0, 1),
            Direction::Left => Vector::new(-1, 0),
        }
    }
}

impl Distribution<Direction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::from_index(rng.gen_range(0, Direction::ALL.len()))
    }
}
