/*
generator/difficulty.rs

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

//! Puzzle difficulty levels.
//!
//! The difficulty controls two things:
//!
//! * The size of the puzzle, which is the length of the hidden word multiplied by
//!   [`Difficulty::multiplier`].
//! * How the cells that are not part of the hidden word are filled (see [`Noise`]).

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::JumbleError;

/// How the noise cells are filled.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Noise {
    /// Random lowercase letters from `a` to `z`.
    Alphabet,

    /// Random letters taken from the hidden word, which creates false leads.
    HiddenWord,
}

/// Puzzle difficulty level.
#[derive(Serialize, Debug, Copy, Clone, PartialOrd, PartialEq, Eq, Hash, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    /// All the difficulty levels, from the easiest to the hardest.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Extreme,
    ];

    /// Return the name of the difficulty level, as accepted by [`Difficulty::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        }
    }

    /// Return the factor applied to the hidden word length to get the puzzle size.
    pub fn multiplier(&self) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard | Difficulty::Extreme => 4,
        }
    }

    /// Return the policy used to fill the noise cells.
    pub fn noise(&self) -> Noise {
        match self {
            Difficulty::Extreme => Noise::HiddenWord,
            _ => Noise::Alphabet,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a difficulty level. The comparison is case sensitive.
impl FromStr for Difficulty {
    type Err = JumbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| JumbleError::InvalidDifficulty {
                given: s.to_string(),
            })
    }
}
