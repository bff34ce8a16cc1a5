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

//! A fixed-size naval grid.
//!
//! [`board`] owns the 10x10 grid of [`Marker`]s and checks and writes ship placements.
//! [`ships`] describes straight ships and the [`Orientation`]s they may run in.
//! [`effects`] generates the 7x7 ability [`Template`]s and stamps them onto a board.
//! [`render`] turns a board into text, and [`scenario`] holds the fixed run-once
//! sequence of ships and abilities used by the console driver.

pub mod board;
pub mod effects;
pub mod render;
pub mod scenario;
pub mod ships;

pub use crate::{
    board::{Board, CannotPlaceReason, Coordinate, Marker, PlaceError, BOARD_SIZE},
    effects::{ParseShapeError, ShapeKind, Template, TEMPLATE_CENTER, TEMPLATE_SIZE},
    ships::{Line, Orientation, SHIP_LEN},
};
