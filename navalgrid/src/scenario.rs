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

//! The fixed sequence of ships and abilities played out by the console driver.
use std::fmt;

use log::info;

use crate::{
    board::{Board, Coordinate, PlaceError},
    effects::{ShapeKind, Template},
    ships::{Line, Orientation},
};

/// A numbered request to place one ship.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct ShipOrder {
    /// Number used to name the ship in reports, starting from 1.
    pub number: usize,
    /// Where the ship should go.
    pub line: Line,
}

/// A request to stamp one ability onto the board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AbilityOrder {
    pub kind: ShapeKind,
    /// Board cell under the template's center.
    pub origin: Coordinate,
}

/// Outcome of a single [`ShipOrder`].
#[derive(Debug)]
pub struct PlacementReport {
    pub order: ShipOrder,
    pub result: Result<(), PlaceError>,
}

impl PlacementReport {
    /// Whether the ship was placed.
    pub fn placed(&self) -> bool {
        self.result.is_ok()
    }
}

impl fmt::Display for PlacementReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let line = &self.order.line;
        match &self.result {
            Ok(()) => write!(
                f,
                "Ship {} ({}) placed at {}.",
                self.order.number,
                line.orientation(),
                line.origin()
            ),
            Err(err) => write!(
                f,
                "Error: could not place ship {} ({}) at {}: {}.",
                self.order.number,
                line.orientation(),
                line.origin(),
                err.reason()
            ),
        }
    }
}

/// The four ships of the default run. The third overlaps the first at `(2,2)` and is
/// rejected.
pub fn ships() -> Vec<ShipOrder> {
    vec![
        (Coordinate::new(2, 1), Orientation::Horizontal),
        (Coordinate::new(4, 6), Orientation::Vertical),
        (Coordinate::new(0, 0), Orientation::DiagonalDownRight),
        (Coordinate::new(2, 7), Orientation::DiagonalUpRight),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (origin, orientation))| ShipOrder {
        number: i + 1,
        line: Line::new(origin, orientation),
    })
    .collect()
}

/// The abilities of the default run, applied in order after the ships are placed.
pub fn abilities() -> Vec<AbilityOrder> {
    ShapeKind::ALL
        .iter()
        .map(|&kind| AbilityOrder {
            kind,
            origin: default_origin(kind),
        })
        .collect()
}

/// Origin used for `kind` in the default run.
pub fn default_origin(kind: ShapeKind) -> Coordinate {
    match kind {
        ShapeKind::Cone => Coordinate::new(1, 2),
        ShapeKind::Cross => Coordinate::new(5, 5),
        ShapeKind::Diamond => Coordinate::new(7, 7),
    }
}

/// Try every order in turn. Rejected ships leave the board unchanged and do not stop
/// the remaining orders.
pub fn place_all(board: &mut Board, orders: &[ShipOrder]) -> Vec<PlacementReport> {
    info!("placing {} ships", orders.len());
    orders
        .iter()
        .map(|&order| PlacementReport {
            order,
            result: board.place_ship(order.line),
        })
        .collect()
}

/// Stamp every ability in turn, returning how many cells each one newly marked.
pub fn apply_all(board: &mut Board, orders: &[AbilityOrder]) -> Vec<(AbilityOrder, usize)> {
    info!("applying {} abilities", orders.len());
    orders
        .iter()
        .map(|&order| {
            let template = Template::generate(order.kind);
            (order, board.apply_overlay(&template, order.origin))
        })
        .collect()
}
