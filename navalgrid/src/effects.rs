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

//! Area-of-effect abilities.
//!
//! A [`Template`] is a small square mask generated from one of the [`ShapeKind`]s. It is
//! stamped onto a [`Board`][crate::board::Board] with
//! [`Board::apply_overlay`][crate::board::Board::apply_overlay], centered on an origin
//! cell.

pub use self::template::{ParseShapeError, ShapeKind, Template};

mod overlay;
mod template;

/// Number of rows and columns in a template.
pub const TEMPLATE_SIZE: usize = 7;

/// Row and column index of a template's center cell.
pub const TEMPLATE_CENTER: usize = TEMPLATE_SIZE / 2;
