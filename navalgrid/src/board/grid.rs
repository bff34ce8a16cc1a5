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

//! Defines the cell storage behind a [`Board`][crate::board::Board].

use std::{
    borrow::Borrow,
    ops::{Index, IndexMut},
};

use crate::board::{Coordinate, BOARD_SIZE};

/// Value held by a single cell of the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Marker {
    /// Open water.
    Empty,
    /// Part of a placed ship.
    Ship,
    /// Covered by an ability's area of effect.
    Effect,
}

impl Marker {
    /// Returns true if nothing has been written to this cell.
    pub fn is_empty(self) -> bool {
        self == Marker::Empty
    }
}

impl Default for Marker {
    fn default() -> Self {
        Marker::Empty
    }
}

/// Square array of cells, addressed by row then column.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(super) struct Grid {
    /// Cells that make up this board.
    pub(super) cells: [[Marker; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    pub(super) fn new() -> Self {
        Self {
            cells: [[Marker::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Get a reference to the cell at the given [`Coordinate`].
    pub(super) fn get<B: Borrow<Coordinate>>(&self, coord: B) -> Option<&Marker> {
        let coord = coord.borrow();
        self.cells.get(coord.row).and_then(|row| row.get(coord.col))
    }

    /// Get a mutable reference to the cell at the given [`Coordinate`].
    pub(super) fn get_mut<B: Borrow<Coordinate>>(&mut self, coord: B) -> Option<&mut Marker> {
        let coord = coord.borrow();
        self.cells
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
    }
}

impl<B: Borrow<Coordinate>> Index<B> for Grid {
    type Output = Marker;

    fn index(&self, coord: B) -> &Self::Output {
        self.get(coord).expect("coordinate out of bounds")
    }
}

impl<B: Borrow<Coordinate>> IndexMut<B> for Grid {
    fn index_mut(&mut self, coord: B) -> &mut Self::Output {
        self.get_mut(coord).expect("coordinate out of bounds")
    }
}
