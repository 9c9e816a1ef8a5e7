/*
generator/direction.rs

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

//! Directions in which the hidden word can be read.

use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use crate::error::JumbleError;

/// Reading direction from the first letter of the word.
///
/// - `North`: the word reads upward (the row decreases).
/// - `East`: the word reads rightward (the column increases).
/// - `South`: the word reads downward (the row increases).
/// - `West`: the word reads leftward (the column decreases).
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All the directions, in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Return a direction chosen uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Direction::from_repr(rng.random_range(0..Direction::ALL.len() as u8)).unwrap_or_default()
    }

    /// Return the single-letter symbol of the direction.
    pub fn symbol(&self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }

    /// Return the cell next to the given one in this direction, or [`None`] when the given cell
    /// is on the border of a puzzle of size `size`.
    pub fn step(&self, row: usize, col: usize, size: usize) -> Option<(usize, usize)> {
        match self {
            Direction::North => row.checked_sub(1).map(|r| (r, col)),
            Direction::East => (col + 1 < size).then_some((row, col + 1)),
            Direction::South => (row + 1 < size).then_some((row + 1, col)),
            Direction::West => col.checked_sub(1).map(|c| (row, c)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = JumbleError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'n' => Ok(Direction::North),
            'e' => Ok(Direction::East),
            's' => Ok(Direction::South),
            'w' => Ok(Direction::West),
            _ => Err(JumbleError::InvalidDirection {
                given: c.to_string(),
            }),
        }
    }
}

/// Parse a direction from its symbol (`n`) or its name (`north`), ignoring case.
impl FromStr for Direction {
    type Err = JumbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Direction::try_from(c);
        }
        Direction::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| JumbleError::InvalidDirection {
                given: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn step_inside_the_grid() {
        assert_eq!(Direction::North.step(2, 2, 5), Some((1, 2)));
        assert_eq!(Direction::East.step(2, 2, 5), Some((2, 3)));
        assert_eq!(Direction::South.step(2, 2, 5), Some((3, 2)));
        assert_eq!(Direction::West.step(2, 2, 5), Some((2, 1)));
    }

    #[test]
    fn step_stops_at_the_border() {
        assert_eq!(Direction::North.step(0, 3, 5), None);
        assert_eq!(Direction::East.step(3, 4, 5), None);
        assert_eq!(Direction::South.step(4, 3, 5), None);
        assert_eq!(Direction::West.step(3, 0, 5), None);
    }

    #[test]
    fn parse_symbols_and_names() {
        assert_eq!("n".parse::<Direction>(), Ok(Direction::North));
        assert_eq!("E".parse::<Direction>(), Ok(Direction::East));
        assert_eq!("south".parse::<Direction>(), Ok(Direction::South));
        assert_eq!("West".parse::<Direction>(), Ok(Direction::West));
        assert_eq!(
            "x".parse::<Direction>(),
            Err(JumbleError::InvalidDirection {
                given: "x".to_string()
            })
        );
        assert!("".parse::<Direction>().is_err());
        assert!("northeast".parse::<Direction>().is_err());
    }

    #[test]
    fn symbol_round_trips() {
        for d in Direction::ALL {
            assert_eq!(Direction::try_from(d.symbol()), Ok(d));
        }
    }

    #[test]
    fn random_draws_every_direction() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut seen: Vec<Direction> = (0..200).map(|_| Direction::random(&mut rng)).collect();
        seen.sort_by_key(|d| *d as u8);
        seen.dedup();
        assert_eq!(seen, Direction::ALL.to_vec());
    }
}
