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

use crate::{
    board::Coordinate,
    ships::{Orientation, SHIP_LEN},
};

/// A straight ship: `len` cells starting at `origin` and running along `orientation`.
/// A line only describes where a ship would go; it exists on the board once placed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Line {
    origin: Coordinate,
    len: usize,
    orientation: Orientation,
}

impl Line {
    /// Construct a standard-length ship from `origin` in the given direction.
    pub fn new<C: Into<Coordinate>>(origin: C, orientation: Orientation) -> Self {
        Self::with_len(origin, SHIP_LEN, orientation)
    }

    /// Construct a linear ship with the specified length. Panics if len is 0.
    pub fn with_len<C: Into<Coordinate>>(origin: C, len: usize, orientation: Orientation) -> Self {
        assert!(len > 0);
        Self {
            origin: origin.into(),
            len,
            orientation,
        }
    }

    /// The first cell of the ship.
    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Get the length of this ship.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Direction the ship runs from its origin.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Coordinate of the `i`-th cell of the ship, or `None` if that cell falls off the
    /// board.
    pub fn cell(&self, i: usize) -> Option<Coordinate> {
        let (d_row, d_col) = self.orientation.step();
        let i = i as isize;
        self.origin.offset(d_row * i, d_col * i)
    }

    /// Get an iterator over every cell of the ship in order from the origin. Cells that
    /// fall off the board are yielded as `None`.
    pub fn cells(&self) -> impl Iterator<Item = Option<Coordinate>> {
        let line = *self;
        (0..self.len).map(move |i| line.cell(i))
    }

    /// All coordinates of the ship, if every one of them is on the board.
    pub fn coords(&self) -> Option<Vec<Coordinate>> {
        self.cells().collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.len == SHIP_LEN {
            write!(f, "{} from {}", self.orientation, self.origin)
        } else {
            write!(
                f,
                "{} from {} (length {})",
                self.orientation, self.origin, self.len
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(line: Line) -> Vec<(usize, usize)> {
        line.coords()
            .unwrap()
            .into_iter()
            .map(Into::into)
            .collect()
    }

    #[test]
    fn offsets_per_orientation() {
        let origin = Coordinate::new(4, 4);
        assert_eq!(
            coords(Line::new(origin, Orientation::Horizontal)),
            vec![(4, 4), (4, 5), (4, 6)]
        );
        assert_eq!(
            coords(Line::new(origin, Orientation::Vertical)),
            vec![(4, 4), (5, 4), (6, 4)]
        );
        assert_eq!(
            coords(Line::new(origin, Orientation::DiagonalDownRight)),
            vec![(4, 4), (5, 5), (6, 6)]
        );
        assert_eq!(
            coords(Line::new(origin, Orientation::DiagonalUpRight)),
            vec![(4, 4), (3, 5), (2, 6)]
        );
    }

    #[test]
    fn cells_past_the_edge_are_none() {
        let line = Line::new(Coordinate::new(8, 6), Orientation::Vertical);
        let cells: Vec<_> = line.cells().collect();
        assert_eq!(
            cells,
            vec![
                Some(Coordinate::new(8, 6)),
                Some(Coordinate::new(9, 6)),
                None
            ]
        );
        assert_eq!(line.coords(), None);
    }

    #[test]
    fn custom_length() {
        let line = Line::with_len(Coordinate::new(0, 0), 5, Orientation::Horizontal);
        assert_eq!(line.len(), 5);
        assert_eq!(line.cell(4), Some(Coordinate::new(0, 4)));
        assert_eq!(line.to_string(), "horizontal from (0,0) (length 5)");
    }

    #[test]
    #[should_panic]
    fn zero_length_panics() {
        Line::with_len(Coordinate::new(0, 0), 0, Orientation::Vertical);
    }
}
