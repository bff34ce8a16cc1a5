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
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::effects::{TEMPLATE_CENTER, TEMPLATE_SIZE};

/// The shapes an ability's area of effect can take.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    /// Triangle with its tip at the top center, widening downward.
    Cone,
    /// The center row and the center column.
    Cross,
    /// Every cell within Manhattan distance `TEMPLATE_CENTER` of the center.
    Diamond,
}

impl ShapeKind {
    /// All shape kinds.
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Cone, ShapeKind::Cross, ShapeKind::Diamond];

    /// Name of this shape, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Cone => "cone",
            ShapeKind::Cross => "cross",
            ShapeKind::Diamond => "diamond",
        }
    }

    /// Whether the template cell at `(row, col)` is part of this shape.
    fn covers(self, row: usize, col: usize) -> bool {
        let d_row = row.abs_diff(TEMPLATE_CENTER);
        let d_col = col.abs_diff(TEMPLATE_CENTER);
        match self {
            ShapeKind::Cone => d_col <= row,
            ShapeKind::Cross => d_row == 0 || d_col == 0,
            ShapeKind::Diamond => d_row + d_col <= TEMPLATE_CENTER,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("invalid ability shape {0:?}, choose \"cone\", \"cross\", or \"diamond\"")]
pub struct ParseShapeError(String);

impl FromStr for ShapeKind {
    type Err = ParseShapeError;

    /// Case-insensitive. `octahedron` is accepted as another name for the diamond.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cone" => Ok(ShapeKind::Cone),
            "cross" => Ok(ShapeKind::Cross),
            "diamond" | "octahedron" => Ok(ShapeKind::Diamond),
            _ => Err(ParseShapeError(s.to_owned())),
        }
    }
}

/// A square mask of the cells an ability affects, relative to the center cell at
/// `(TEMPLATE_CENTER, TEMPLATE_CENTER)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Template {
    kind: ShapeKind,
    mask: [[bool; TEMPLATE_SIZE]; TEMPLATE_SIZE],
}

impl Template {
    /// Build the template for the given shape.
    pub fn generate(kind: ShapeKind) -> Self {
        let mut mask = [[false; TEMPLATE_SIZE]; TEMPLATE_SIZE];
        for (row, cells) in mask.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = kind.covers(row, col);
            }
        }
        Self { kind, mask }
    }

    /// The shape this template was generated from.
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Whether the cell at `(row, col)` is affected. Cells outside the template are not.
    pub fn is_affected(&self, row: usize, col: usize) -> bool {
        self.mask
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Get an iterator over the `(row, col)` of every affected cell in row-major order.
    pub fn affected(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        self.mask.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, hit)| *hit)
                .map(move |(col, _)| (row, col))
        })
    }

    /// Number of affected cells.
    pub fn area(&self) -> usize {
        self.affected().count()
    }
}

impl From<ShapeKind> for Template {
    fn from(kind: ShapeKind) -> Self {
        Self::generate(kind)
    }
}

impl fmt::Display for Template {
    /// Writes the mask as rows of `1` and `0`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for cells in self.mask.iter() {
            let mut first = true;
            for &hit in cells.iter() {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                f.write_str(if hit { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
