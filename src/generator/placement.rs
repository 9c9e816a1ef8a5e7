/*
generator/placement.rs

Copyright 2025 Hervé Quatremain

This file is part of Jumble.

Jumble is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Jumble is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Jumble. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Position and direction of the hidden word in the puzzle.

use serde::Serialize;

use super::direction::Direction;

/// Starting cell and reading direction of a word in the puzzle.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Placement {
    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Reading direction from the first letter.
    pub direction: Direction,
}

impl Placement {
    /// Create a [`Placement`] object.
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            row,
            col,
            direction,
        }
    }

    /// Return the cells covered by a word of `len` letters, in reading order.
    ///
    /// Return [`None`] if the starting cell or any of the following cells is outside a puzzle of
    /// size `size`.
    pub fn path(&self, len: usize, size: usize) -> Option<Vec<(usize, usize)>> {
        if self.row >= size || self.col >= size {
            return None;
        }
        let mut cells: Vec<(usize, usize)> = Vec::with_capacity(len);
        let mut cell: (usize, usize) = (self.row, self.col);
        for i in 0..len {
            if i > 0 {
                cell = self.direction.step(cell.0, cell.1, size)?;
            }
            cells.push(cell);
        }
        Some(cells)
    }
}
