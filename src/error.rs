/*
error.rs

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

//! Errors raised while building a puzzle or verifying a guess.

use thiserror::Error;

use crate::generator::direction::Direction;

/// Type of errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JumbleError {
    /// The difficulty level is not one of the recognized names (case sensitive).
    #[error("invalid difficulty '{given}' - please enter 'easy', 'medium', 'hard' or 'extreme' (case sensitive)")]
    InvalidDifficulty {
        /// Rejected difficulty string.
        given: String,
    },

    /// The word to hide is empty.
    #[error("invalid word to hide - please enter another word")]
    InvalidWord,

    /// The direction is not one of `n`, `e`, `s`, `w` (or the full names).
    #[error("invalid direction '{given}' - please enter 'n', 'e', 's' or 'w'")]
    InvalidDirection {
        /// Rejected direction string.
        given: String,
    },

    /// The guess is not in the `ROW COLUMN DIRECTION` format.
    #[error("invalid guess '{given}' - please enter a row, a column and a direction, such as '3 4 n'")]
    InvalidGuess {
        /// Rejected guess string.
        given: String,
    },

    /// Walking from the guessed cell in the guessed direction leaves the grid.
    #[error(
        "guess at row {row}, column {col} going {direction} does not fit in the {size}x{size} puzzle"
    )]
    OutOfBounds {
        /// Guessed starting row.
        row: usize,

        /// Guessed starting column.
        col: usize,

        /// Guessed direction.
        direction: Direction,

        /// Size of the puzzle.
        size: usize,
    },
}
