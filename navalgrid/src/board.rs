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

//! Types that make up the game board.

use std::ops::Index;

use log::debug;

use crate::ships::Line;

use self::grid::Grid;
pub use self::{
    common::Coordinate2D as Coordinate,
    errors::{CannotPlaceReason, PlaceError},
    grid::Marker,
};

pub mod common;
mod errors;
mod grid;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 10;

/// The playing surface: a fixed 10x10 grid of [`Marker`]s, all empty when created.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Grid of cells written by ship placement and ability overlays.
    grid: Grid,
}

impl Board {
    /// Construct a board with every cell empty.
    pub fn new() -> Self {
        Self { grid: Grid::new() }
    }

    /// Get the marker at the given coordinate. Returns `None` if the coordinate is out of
    /// bounds.
    pub fn get(&self, coord: Coordinate) -> Option<Marker> {
        self.grid.get(coord).copied()
    }

    /// Mutable access to a single cell, for the overlay applicator.
    pub(crate) fn get_mut(&mut self, coord: Coordinate) -> Option<&mut Marker> {
        self.grid.get_mut(coord)
    }

    /// Get an iterator over the rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Marker]> {
        self.grid.cells.iter().map(|row| &row[..])
    }

    /// Get an iterator over every cell along with its coordinate, in row-major order.
    pub fn cells(&self) -> impl '_ + Iterator<Item = (Coordinate, Marker)> {
        self.rows().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, marker)| (Coordinate::new(row, col), *marker))
        })
    }

    /// Count the cells holding the given marker.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells().filter(|(_, m)| *m == marker).count()
    }

    /// Check whether the given ship could be placed: every cell of the line must be on
    /// the board and currently empty. Does not modify the board.
    pub fn check_placement(&self, line: &Line) -> Result<(), PlaceError> {
        for cell in line.cells() {
            let coord = cell.ok_or_else(|| PlaceError::out_of_bounds(*line))?;
            match self.grid.get(coord) {
                None => return Err(PlaceError::out_of_bounds(*line)),
                Some(marker) if !marker.is_empty() => {
                    return Err(PlaceError::occupied(*line, coord));
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns true if [`check_placement`][Board::check_placement] would accept the line.
    pub fn can_place(&self, line: &Line) -> bool {
        self.check_placement(line).is_ok()
    }

    /// Try to place the ship, returning an error if placement is not possible. Either
    /// every cell of the line is marked as [`Marker::Ship`] or the board is left
    /// untouched.
    pub fn place_ship(&mut self, line: Line) -> Result<(), PlaceError> {
        if let Err(err) = self.check_placement(&line) {
            debug!("rejected ship {}: {}", line, err.reason());
            return Err(err);
        }
        self.stamp(&line);
        debug!("placed ship {}", line);
        Ok(())
    }

    /// Write the ship marker into every cell of an already-validated line.
    fn stamp(&mut self, line: &Line) {
        // check_placement ensured every cell is on the board.
        for coord in line.cells().flatten() {
            self.grid[coord] = Marker::Ship;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coordinate> for Board {
    type Output = Marker;

    /// Panics if the coordinate is out of bounds.
    fn index(&self, coord: Coordinate) -> &Self::Output {
        &self.grid[coord]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ships::Orientation;

    fn ship(row: usize, col: usize, orientation: Orientation) -> Line {
        Line::new(Coordinate::new(row, col), orientation)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count(Marker::Empty), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(board.rows().count(), BOARD_SIZE);
        assert!(board.rows().all(|row| row.len() == BOARD_SIZE));
    }

    #[test]
    fn place_horizontal() {
        let mut board = Board::new();
        board
            .place_ship(ship(2, 1, Orientation::Horizontal))
            .unwrap();
        for col in 1..=3 {
            assert_eq!(board[Coordinate::new(2, col)], Marker::Ship);
        }
        assert_eq!(board.count(Marker::Ship), 3);
    }

    #[test]
    fn place_diagonals() {
        let mut board = Board::new();
        board
            .place_ship(ship(0, 0, Orientation::DiagonalDownRight))
            .unwrap();
        board
            .place_ship(ship(2, 7, Orientation::DiagonalUpRight))
            .unwrap();
        for &(row, col) in &[(0, 0), (1, 1), (2, 2), (2, 7), (1, 8), (0, 9)] {
            assert_eq!(board[Coordinate::new(row, col)], Marker::Ship);
        }
        assert_eq!(board.count(Marker::Ship), 6);
    }

    #[test]
    fn vertical_off_the_bottom() {
        let mut board = Board::new();
        let line = ship(8, 6, Orientation::Vertical);
        assert!(!board.can_place(&line));
        let err = board.place_ship(line).unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
        assert_eq!(err.blocked(), None);
        assert_eq!(*err.placement(), line);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn diagonal_up_off_the_top() {
        let board = Board::new();
        assert!(!board.can_place(&ship(1, 0, Orientation::DiagonalUpRight)));
        assert!(board.can_place(&ship(2, 0, Orientation::DiagonalUpRight)));
    }

    #[test]
    fn origin_off_the_board() {
        let board = Board::new();
        let err = board
            .check_placement(&ship(10, 0, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::OutOfBounds);
    }

    #[test]
    fn overlap_is_rejected_without_partial_write() {
        let mut board = Board::new();
        board
            .place_ship(ship(2, 1, Orientation::Horizontal))
            .unwrap();
        let before = board.clone();
        let err = board
            .place_ship(ship(0, 0, Orientation::DiagonalDownRight))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
        assert_eq!(err.blocked(), Some(Coordinate::new(2, 2)));
        assert_eq!(board, before);
        assert_eq!(board[Coordinate::new(0, 0)], Marker::Empty);
    }

    #[test]
    fn effect_cells_block_ships() {
        let mut board = Board::new();
        *board.get_mut(Coordinate::new(5, 5)).unwrap() = Marker::Effect;
        let err = board
            .place_ship(ship(5, 4, Orientation::Horizontal))
            .unwrap_err();
        assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied);
    }

    #[test]
    fn error_message_names_the_ship() {
        let err = Board::new()
            .check_placement(&ship(8, 6, Orientation::Vertical))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "could not place ship vertical from (8,6): \
             insufficient space for the ship at the specified position"
        );
    }
}
