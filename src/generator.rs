/*
generator.rs

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

//! Generate word-search puzzles.
//!
//! A [`jumble::JumblePuzzle`] object hides one word in a square [`grid::Grid`] of letters.
//! Building the object goes through the following steps:
//!
//! * The difficulty string is parsed into a [`difficulty::Difficulty`], and the word is verified
//!   to not be empty.
//! * The size of the puzzle is the length of the word multiplied by
//!   [`difficulty::Difficulty::multiplier`].
//! * All the cells are filled with noise letters.
//!   For the `extreme` difficulty level, the noise letters are taken from the hidden word.
//! * A random [`placement::Placement`] (starting cell and [`direction::Direction`]) is drawn
//!   until the word fits in the grid, and then the word is written at that placement.
//!
//! The [`jumble::JumblePuzzle::check_placement`] method verifies the player's guesses.

pub mod difficulty;
pub mod direction;
pub mod grid;
pub mod jumble;
pub mod placement;
