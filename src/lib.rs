/*
lib.rs

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

//! Word-search puzzles that hide a single word.
//!
//! ```
//! use jumble::JumblePuzzle;
//!
//! let puzzle = JumblePuzzle::new("cat", "easy").unwrap();
//! assert_eq!(puzzle.size(), 6);
//! assert_eq!(
//!     puzzle.check_placement(puzzle.row_pos(), puzzle.col_pos(), puzzle.direction()),
//!     Ok(true)
//! );
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod player_input;

pub use self::error::JumbleError;
pub use self::generator::difficulty::Difficulty;
pub use self::generator::direction::Direction;
pub use self::generator::grid::Grid;
pub use self::generator::jumble::JumblePuzzle;
pub use self::generator::placement::Placement;
