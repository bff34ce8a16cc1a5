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
use log::{debug, trace};

use crate::{
    board::{Board, Coordinate, Marker},
    effects::{Template, TEMPLATE_CENTER},
};

impl Board {
    /// Stamp `template` onto the board with its center cell on `origin`. Every affected
    /// template cell that maps to an empty cell on the board becomes
    /// [`Marker::Effect`]. Cells that map off the board or onto a ship or an existing
    /// effect are skipped. Returns the number of cells that were newly marked.
    pub fn apply_overlay(&mut self, template: &Template, origin: Coordinate) -> usize {
        let center = TEMPLATE_CENTER as isize;
        let mut applied = 0;
        for (row, col) in template.affected() {
            let target = match origin.offset(row as isize - center, col as isize - center) {
                Some(target) => target,
                None => continue,
            };
            match self.get_mut(target) {
                Some(cell) if cell.is_empty() => {
                    *cell = Marker::Effect;
                    applied += 1;
                }
                Some(cell) => trace!("{} overlay skipped {:?} at {}", template.kind(), cell, target),
                None => {}
            }
        }
        debug!(
            "applied {} at {}: {} of {} cells marked",
            template.kind(),
            origin,
            applied,
            template.area()
        );
        applied
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        board::{Board, Coordinate, Marker, BOARD_SIZE},
        effects::{ShapeKind, Template},
        ships::{Line, Orientation},
    };

    #[test]
    fn cross_on_empty_board() {
        let mut board = Board::new();
        let applied = board.apply_overlay(
            &Template::generate(ShapeKind::Cross),
            Coordinate::new(5, 5),
        );
        assert_eq!(applied, 13);
        for (coord, marker) in board.cells() {
            let on_cross = (coord.row == 5 && (2..=8).contains(&coord.col))
                || (coord.col == 5 && (2..=8).contains(&coord.row));
            let expected = if on_cross { Marker::Effect } else { Marker::Empty };
            assert_eq!(marker, expected, "at {}", coord);
        }
    }

    #[test]
    fn clipped_at_the_corner() {
        let mut board = Board::new();
        let applied = board.apply_overlay(
            &Template::generate(ShapeKind::Diamond),
            Coordinate::new(0, 0),
        );
        // Only the quadrant with non-negative offsets lands on the board.
        assert_eq!(applied, 10);
        assert_eq!(board[Coordinate::new(0, 3)], Marker::Effect);
        assert_eq!(board[Coordinate::new(1, 2)], Marker::Effect);
        assert_eq!(board[Coordinate::new(2, 2)], Marker::Empty);
    }

    #[test]
    fn ships_are_never_overwritten() {
        let mut board = Board::new();
        board
            .place_ship(Line::new(Coordinate::new(4, 6), Orientation::Vertical))
            .unwrap();
        let applied = board.apply_overlay(
            &Template::generate(ShapeKind::Cross),
            Coordinate::new(5, 5),
        );
        assert_eq!(applied, 12);
        assert_eq!(board[Coordinate::new(5, 6)], Marker::Ship);
        assert_eq!(board.count(Marker::Ship), 3);
        assert_eq!(board.count(Marker::Effect), 12);
    }

    #[test]
    fn reapplying_changes_nothing() {
        let mut board = Board::new();
        let cone = Template::generate(ShapeKind::Cone);
        let first = board.apply_overlay(&cone, Coordinate::new(1, 2));
        let snapshot = board.clone();
        assert_eq!(board.apply_overlay(&cone, Coordinate::new(1, 2)), 0);
        assert_eq!(board, snapshot);
        assert_eq!(board.count(Marker::Effect), first);
    }

    #[test]
    fn origin_far_off_the_board() {
        let mut board = Board::new();
        let applied = board.apply_overlay(
            &Template::generate(ShapeKind::Cross),
            Coordinate::new(BOARD_SIZE + 10, BOARD_SIZE + 10),
        );
        assert_eq!(applied, 0);
        assert_eq!(board, Board::new());
    }
}
