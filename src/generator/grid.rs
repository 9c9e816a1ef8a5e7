/*
generator/grid.rs

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

//! Square grid of letters.

use std::fmt;
use std::ops::Index;
use std::slice::ChunksExact;

/// Square grid of letters, stored row after row in a single vector.
///
/// The grid is always fully populated: every one of the `size * size` cells holds a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Number of rows, which is also the number of columns.
    size: usize,

    /// Cells in row-major order.
    cells: Vec<char>,
}

impl Grid {
    /// Create a [`Grid`] object of `size` rows and columns. The letter for each cell is provided
    /// by the `letter` closure, which receives the row and column of the cell.
    pub fn filled<F>(size: usize, mut letter: F) -> Self
    where
        F: FnMut(usize, usize) -> char,
    {
        let mut cells: Vec<char> = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                cells.push(letter(row, col));
            }
        }
        Self { size, cells }
    }

    /// Return the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at the given position, or [`None`] if the position is outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Replace the letter at the given position.
    ///
    /// # Panics
    ///
    /// Panics if the position is outside the grid.
    pub(crate) fn set(&mut self, row: usize, col: usize, letter: char) {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) is outside the grid");
        self.cells[row * self.size + col] = letter;
    }

    /// Return an iterator over the rows. Each row is a slice of `size` letters.
    pub fn rows(&self) -> ChunksExact<'_, char> {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Return the rows as strings.
    pub fn row_strings(&self) -> Vec<String> {
        self.rows().map(|r| r.iter().collect()).collect()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = char;

    fn index(&self, (row, col): (usize, usize)) -> &char {
        assert!(row < self.size && col < self.size, "cell ({row}, {col}) is outside the grid");
        &self.cells[row * self.size + col]
    }
}

/// Display the grid with the column numbers on top and the row numbers on the left.
///
/// ```text
///     0 1 2
///  0  c x a
///  1  q t p
///  2  e l m
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width: usize = self.size.saturating_sub(1).to_string().len();

        write!(f, "{:width$}  ", "")?;
        for col in 0..self.size {
            if col > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:>width$}", col)?;
        }
        writeln!(f)?;

        for (row, letters) in self.rows().enumerate() {
            write!(f, "{row:>width$}  ")?;
            for (col, letter) in letters.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter:>width$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
