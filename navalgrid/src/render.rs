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

//! Text rendering of the board.
//!
//! The board is written as a header line of column indices followed by one line per
//! row. Each line starts with the row index and holds one token per cell.

use std::fmt;

use crate::board::{Board, Marker, BOARD_SIZE};

/// Explanation of the cell tokens, suitable for printing above a rendered board.
pub const LEGEND: &str = "0 = water, 3 = ship, 5 = ability area";

impl Marker {
    /// Token used for this marker in a rendered board.
    pub fn token(self) -> &'static str {
        match self {
            Marker::Empty => "0",
            Marker::Ship => "3",
            Marker::Effect => "5",
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.token())
    }
}

impl Board {
    /// Render the board to a string, same as its [`Display`][fmt::Display] output.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (i, row) in self.rows().enumerate() {
            write!(f, "{:>2} |", i)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
