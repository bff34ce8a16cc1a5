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
use std::fmt;

use crate::board::BOARD_SIZE;

/// The coordinates of a cell in the board. Rows grow downward and columns grow to the
/// right, both starting from 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate2D {
    /// Vertical position of the cell.
    pub row: usize,
    /// Horizontal position of the cell.
    pub col: usize,
}

impl Coordinate2D {
    /// Construct a [`Coordinate2D`] from the given `row` and `col`. The result is not
    /// required to be on the board.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate lies on the board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Shift this coordinate by a signed number of rows and columns. Returns `None` if
    /// the result is off the board on either axis.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: offset_axis(self.row, d_row)?,
            col: offset_axis(self.col, d_col)?,
        })
    }
}

/// Apply a signed delta to one axis, keeping the result in `[0, BOARD_SIZE)`.
fn offset_axis(base: usize, delta: isize) -> Option<usize> {
    let moved = if delta < 0 {
        base.checked_sub(delta.unsigned_abs())?
    } else {
        base.checked_add(delta as usize)?
    };
    if moved < BOARD_SIZE {
        Some(moved)
    } else {
        None
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Coordinate2D {
    /// Construct a [`Coordinate2D`] from the given `(row, col)` pair.
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate2D> for (usize, usize) {
    /// Convert the [`Coordinate2D`] into a `(row, col)` pair.
    fn from(coord: Coordinate2D) -> Self {
        (coord.row, coord.col)
    }
}
