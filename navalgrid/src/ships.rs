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

//! Types used for defining ships and their placement direction.
use std::fmt;

pub use self::linear::Line;

mod linear;

/// Number of cells every ship occupies.
pub const SHIP_LEN: usize = 3;

/// Direction in which a ship extends from its origin cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Orientation {
    /// Row fixed, column increases.
    Horizontal,
    /// Column fixed, row increases.
    Vertical,
    /// Row and column both increase.
    DiagonalDownRight,
    /// Row decreases, column increases.
    DiagonalUpRight,
}

impl Orientation {
    /// All orientations.
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagonalDownRight,
        Orientation::DiagonalUpRight,
    ];

    /// Change in `(row, col)` between one cell of a ship and the next.
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagonalDownRight => (1, 1),
            Orientation::DiagonalUpRight => (-1, 1),
        }
    }

    /// Human readable name of this orientation.
    pub fn name(self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
            Orientation::DiagonalDownRight => "diagonal down-right",
            Orientation::DiagonalUpRight => "diagonal up-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_orientation_advances() {
        for &orientation in Orientation::ALL.iter() {
            let (d_row, d_col) = orientation.step();
            assert!(d_row != 0 || d_col != 0, "{} does not move", orientation);
            assert!(d_col >= 0);
        }
        assert_eq!(Orientation::DiagonalUpRight.step(), (-1, 1));
    }

    #[test]
    fn names() {
        let names: Vec<_> = Orientation::ALL.iter().map(|o| o.to_string()).collect();
        assert_eq!(
            names,
            vec![
                "horizontal",
                "vertical",
                "diagonal down-right",
                "diagonal up-right"
            ]
        );
    }
}
