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

//! Cell-state grid that placed ships are projected onto for rendering.

use std::ops::Index;

use crate::{
    board::{CannotProjectReason, Coordinate, ProjectError, GRID_SIZE},
    ships::Ship,
};

/// Classification of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum CellState {
    Empty = 0,
    Miss = 1,
    Ship = 3,
    Hit = 4,
}

impl CellState {
    /// Numeric code of this state, as consumed by renderers.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Default for CellState {
    fn default() -> Self {
        CellState::Empty
    }
}

/// A single cell in the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Cell {
    /// What currently occupies the cell.
    pub state: CellState,

    /// Display code of the ship covering this cell, if any.
    pub code: Option<char>,
}

/// A `GRID_SIZE` x `GRID_SIZE` grid of cells. Independent from the ships projected onto
/// it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Grid {
    cells: Box<[Cell]>,
}

impl Grid {
    /// Create a grid with every cell empty.
    pub fn new() -> Self {
        let cells = (0..GRID_SIZE * GRID_SIZE).map(|_| Cell::default()).collect();
        Self { cells }
    }

    /// Build a grid with all of the given ships projected onto it.
    pub fn from_ships<'a>(ships: impl IntoIterator<Item = &'a Ship>) -> Result<Self, ProjectError> {
        let mut grid = Self::new();
        for ship in ships {
            grid.project(ship)?;
        }
        Ok(grid)
    }

    /// Mark every cell of the ship as [`CellState::Ship`] and record its code. The grid is
    /// left unchanged if the ship is out of bounds or overlaps a cell that is not empty.
    pub fn project(&mut self, ship: &Ship) -> Result<(), ProjectError> {
        for coord in ship.cells() {
            match self.get(coord) {
                None => {
                    return Err(ProjectError::new(
                        CannotProjectReason::OutOfBounds,
                        ship.id(),
                        coord,
                    ))
                }
                Some(cell) if cell.state != CellState::Empty => {
                    return Err(ProjectError::new(
                        CannotProjectReason::AlreadyOccupied,
                        ship.id(),
                        coord,
                    ))
                }
                _ => {}
            }
        }
        // Already ensured that every cell is valid and empty.
        for coord in ship.cells() {
            if let Some(cell) = self.get_mut(coord) {
                cell.state = CellState::Ship;
                cell.code = Some(ship.code());
            }
        }
        Ok(())
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        linearize(coord).and_then(|i| self.cells.get(i))
    }

    fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Cell> {
        linearize(coord).and_then(move |i| self.cells.get_mut(i))
    }

    /// Change the state of a cell, keeping its display code. Returns the previous state,
    /// or `None` if the coordinate is out of bounds.
    pub fn set_state(&mut self, coord: Coordinate, state: CellState) -> Option<CellState> {
        self.get_mut(coord).map(|cell| std::mem::replace(&mut cell.state, state))
    }

    /// Count the cells currently in the [`CellState::Ship`] state.
    pub fn count_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.state == CellState::Ship)
            .count()
    }

    /// Get an iterator over rows of this grid, top to bottom. Each row is an iterator over
    /// the cells of that row, left to right.
    pub fn iter_rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.chunks(GRID_SIZE).map(|row| row.iter())
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coordinate> for Grid {
    type Output = Cell;

    fn index(&self, coord: Coordinate) -> &Cell {
        self.get(coord).expect("coordinate out of bounds")
    }
}

fn linearize(coord: Coordinate) -> Option<usize> {
    if coord.x < GRID_SIZE && coord.y < GRID_SIZE {
        Some(coord.y * GRID_SIZE + coord.x)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::{Orientation, ShipTypeSpec};

    fn ship(id: usize, length: usize, orientation: Orientation, x: usize, y: usize) -> Ship {
        let spec = ShipTypeSpec::new(length, 'X', 1);
        Ship::new(id, "test", &spec, orientation, Coordinate::new(x, y))
    }

    #[test]
    fn new_grid_is_empty() {
        let grid = Grid::new();
        assert_eq!(grid.iter_rows().count(), GRID_SIZE);
        assert!(grid.iter_rows().flatten().all(|cell| *cell == Cell::default()));
        assert_eq!(grid[Coordinate::new(9, 9)].state, CellState::Empty);
    }

    #[test]
    fn projects_cells_and_codes() {
        let grid = Grid::from_ships(&[
            ship(0, 3, Orientation::Horizontal, 7, 0),
            ship(1, 2, Orientation::Vertical, 0, 8),
        ])
        .unwrap();
        assert_eq!(grid.count_ship_cells(), 5);
        for &(x, y) in &[(7, 0), (8, 0), (9, 0), (0, 8), (0, 9)] {
            let cell = grid[Coordinate::new(x, y)];
            assert_eq!(cell.state, CellState::Ship);
            assert_eq!(cell.code, Some('X'));
        }
        assert_eq!(grid[Coordinate::new(6, 0)].state, CellState::Empty);
    }

    #[test]
    fn rejects_out_of_bounds() {
        let mut grid = Grid::new();
        let err = grid.project(&ship(4, 3, Orientation::Horizontal, 8, 2)).unwrap_err();
        assert_eq!(err.reason(), CannotProjectReason::OutOfBounds);
        assert_eq!(err.ship(), 4);
        assert_eq!(err.coord(), Coordinate::new(10, 2));
        assert_eq!(grid, Grid::new());
    }

    #[test]
    fn rejects_overlap() {
        let mut grid = Grid::new();
        grid.project(&ship(0, 4, Orientation::Horizontal, 2, 2)).unwrap();
        let err = grid.project(&ship(1, 3, Orientation::Vertical, 3, 0)).unwrap_err();
        assert_eq!(err.reason(), CannotProjectReason::AlreadyOccupied);
        assert_eq!(err.coord(), Coordinate::new(3, 2));
        assert_eq!(grid.count_ship_cells(), 4);
    }

    #[test]
    fn set_state_keeps_code() {
        let mut grid = Grid::from_ships(&[ship(0, 2, Orientation::Horizontal, 0, 0)]).unwrap();
        assert_eq!(
            grid.set_state(Coordinate::new(1, 0), CellState::Hit),
            Some(CellState::Ship)
        );
        assert_eq!(
            grid.set_state(Coordinate::new(5, 5), CellState::Miss),
            Some(CellState::Empty)
        );
        assert_eq!(grid.set_state(Coordinate::new(10, 0), CellState::Miss), None);
        assert_eq!(grid[Coordinate::new(1, 0)].code, Some('X'));
        assert_eq!(grid[Coordinate::new(1, 0)].state.code(), 4);
    }
}
