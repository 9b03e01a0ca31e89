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
use std::{convert::TryFrom, ops::Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The coordinates of a [`Cell`][crate::board::Cell] in the board. `x` grows to the
/// right and `y` grows downward, so `(0, 0)` is the top-left cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Horizontal position of the cell.
    pub x: usize,
    /// Vertical position of the cell.
    pub y: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `x` and `y`.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Add the given [`Vector`] to this coordinate. Returns `None` if either axis would
    /// go below zero. Does not check the upper edge of the board.
    pub fn offset(self, by: Vector) -> Option<Self> {
        Some(Self {
            x: offset_axis(self.x, by.dx)?,
            y: offset_axis(self.y, by.dy)?,
        })
    }
}

fn offset_axis(pos: usize, delta: isize) -> Option<usize> {
    let pos = isize::try_from(pos).ok()?.checked_add(delta)?;
    usize::try_from(pos).ok()
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(x, y)` pair.
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into an `(x, y)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.x, coord.y)
    }
}

/// A signed displacement on the board, used to nudge ships around.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Vector {
    pub dx: isize,
    pub dy: isize,
}

impl Vector {
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }
}

impl Mul<isize> for Vector {
    type Output = Vector;

    fn mul(self, scalar: isize) -> Vector {
        Vector::new(self.dx * scalar, self.dy * scalar)
    }
}
