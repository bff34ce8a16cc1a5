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

//! Errors used by the `Board`.

use std::fmt::{self, Debug};

use thiserror::Error;

use crate::{board::Coordinate, ships::Line};

/// Reason why a ship could not be placed.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// At least one cell of the ship would be off the board.
    #[error("insufficient space for the ship at the specified position")]
    OutOfBounds,
    /// At least one cell of the ship is not empty.
    #[error("the specified position was already occupied")]
    AlreadyOccupied,
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Error)]
#[error("could not place ship {placement}: {reason}")]
pub struct PlaceError {
    #[source]
    reason: CannotPlaceReason,
    /// The occupied cell that blocked placement, if the ship fit on the board.
    blocked: Option<Coordinate>,
    placement: Line,
}

impl Debug for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl PlaceError {
    /// Error for a placement that runs off the board.
    pub(super) fn out_of_bounds(placement: Line) -> Self {
        Self {
            reason: CannotPlaceReason::OutOfBounds,
            blocked: None,
            placement,
        }
    }

    /// Error for a placement that overlaps the non-empty cell at `blocked`.
    pub(super) fn occupied(placement: Line, blocked: Coordinate) -> Self {
        Self {
            reason: CannotPlaceReason::AlreadyOccupied,
            blocked: Some(blocked),
            placement,
        }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// The first non-empty cell the ship would have covered, if the ship fit on the
    /// board.
    pub fn blocked(&self) -> Option<Coordinate> {
        self.blocked
    }

    /// Get a reference to the [`Line`] where placement was attempted.
    pub fn placement(&self) -> &Line {
        &self.placement
    }

    /// Extract the attempted placement from this error.
    pub fn into_placement(self) -> Line {
        self.placement
    }
}
