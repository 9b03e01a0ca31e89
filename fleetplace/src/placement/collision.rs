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

//! Pairwise collision tests between ships.

use crate::ships::Ship;

/// Which test the [`Placer`][crate::Placer] uses to decide whether two ships collide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CollisionTest {
    /// Ships collide when they share at least one cell.
    Exact,
    /// Bounding-box test: the box spanning both ships is no bigger than the larger
    /// footprint on each axis, or its area is too small to hold both lengths. For
    /// straight ships this reports the same pairs as [`CollisionTest::Exact`].
    BoundingBox,
    /// Only the first clause of [`CollisionTest::BoundingBox`]. Misses collinear ships
    /// that overlap end to end. The [`Placer`][crate::Placer] reports any overlap this
    /// leaves behind as [`PlacementError::Overlap`][crate::PlacementError::Overlap].
    Span,
}

impl CollisionTest {
    /// Check whether `a` and `b` collide. Both arguments are expected to be distinct
    /// ships; a ship always collides with itself.
    pub fn collides(self, a: &Ship, b: &Ship) -> bool {
        match self {
            CollisionTest::Exact => overlaps(a, b),
            CollisionTest::BoundingBox => {
                let bounds = Bounds::of(a, b);
                bounds.spans_min() || bounds.area_too_small()
            }
            CollisionTest::Span => Bounds::of(a, b).spans_min(),
        }
    }
}

impl Default for CollisionTest {
    fn default() -> Self {
        CollisionTest::Exact
    }
}

/// Returns true if the two ships cover at least one common cell. Ships are straight
/// lines, so their footprints are rectangles and an interval test per axis is exact.
pub fn overlaps(a: &Ship, b: &Ship) -> bool {
    let (a_start, a_end) = (a.position(), a.end());
    let (b_start, b_end) = (b.position(), b.end());
    a_start.x < b_end.x && b_start.x < a_end.x && a_start.y < b_end.y && b_start.y < a_end.y
}

/// Box measurements used by the heuristic tests.
struct Bounds {
    /// Widest and tallest footprint of the two ships, per axis.
    min: (usize, usize),
    /// Size of the smallest box containing both ships.
    current: (usize, usize),
    /// Combined length of both ships.
    lengths: usize,
}

impl Bounds {
    fn of(a: &Ship, b: &Ship) -> Self {
        let (a_w, a_h) = a.footprint();
        let (b_w, b_h) = b.footprint();
        let (a_start, a_end) = (a.position(), a.end());
        let (b_start, b_end) = (b.position(), b.end());
        Self {
            min: (a_w.max(b_w), a_h.max(b_h)),
            current: (
                a_end.x.max(b_end.x) - a_start.x.min(b_start.x),
                a_end.y.max(b_end.y) - a_start.y.min(b_start.y),
            ),
            lengths: a.length() + b.length(),
        }
    }

    fn spans_min(&self) -> bool {
        self.current == self.min
    }

    fn area_too_small(&self) -> bool {
        self.current.0 * self.current.1 < self.lengths
    }
}
