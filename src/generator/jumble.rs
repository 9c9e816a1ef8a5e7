/*
generator/jumble.rs

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

//! Build a puzzle that hides a word and verify the player's guesses.

use log::debug;
use rand::Rng;

use super::difficulty::{Difficulty, Noise};
use super::direction::Direction;
use super::grid::Grid;
use super::placement::Placement;
use crate::error::JumbleError;

/// Puzzle that hides a single word in a square grid of letters.
///
/// Cloning the object copies the whole grid; two clones never share their cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JumblePuzzle {
    /// Word to find. Never empty.
    hidden_word: Vec<char>,

    /// Difficulty level used to build the puzzle.
    difficulty: Difficulty,

    /// Letters of the puzzle.
    grid: Grid,

    /// Where the hidden word has been written in the grid.
    placement: Placement,
}

impl JumblePuzzle {
    /// Create a [`JumblePuzzle`] object by using the thread-local random number generator.
    ///
    /// # Errors
    ///
    /// The difficulty is verified first: if it is not `easy`, `medium`, `hard`, or `extreme`
    /// (case sensitive), then the method returns [`JumbleError::InvalidDifficulty`].
    /// If the word is empty, then the method returns [`JumbleError::InvalidWord`].
    pub fn new(hidden_word: &str, difficulty: &str) -> Result<Self, JumbleError> {
        Self::with_rng(hidden_word, difficulty, &mut rand::rng())
    }

    /// Create a [`JumblePuzzle`] object by using the provided random number generator.
    ///
    /// Providing a seeded generator produces the same puzzle for the same word and difficulty.
    ///
    /// # Errors
    ///
    /// See [`JumblePuzzle::new`].
    pub fn with_rng<R: Rng + ?Sized>(
        hidden_word: &str,
        difficulty: &str,
        rng: &mut R,
    ) -> Result<Self, JumbleError> {
        let difficulty: Difficulty = difficulty.parse()?;
        Self::from_difficulty(hidden_word, difficulty, rng)
    }

    /// Create a [`JumblePuzzle`] object for an already parsed [`Difficulty`].
    ///
    /// # Errors
    ///
    /// The method returns [`JumbleError::InvalidWord`] if the word is empty.
    pub fn from_difficulty<R: Rng + ?Sized>(
        hidden_word: &str,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Result<Self, JumbleError> {
        if hidden_word.is_empty() {
            return Err(JumbleError::InvalidWord);
        }
        let hidden_word: Vec<char> = hidden_word.chars().collect();
        let size: usize = hidden_word.len() * difficulty.multiplier();
        debug!("Building a {size}x{size} puzzle ({difficulty})");

        let mut grid: Grid = Self::noise_grid(&hidden_word, difficulty, size, rng);
        let placement: Placement = Self::place_word(&hidden_word, &mut grid, rng);

        Ok(Self {
            hidden_word,
            difficulty,
            grid,
            placement,
        })
    }

    /// Build a grid where all the cells are noise letters.
    fn noise_grid<R: Rng + ?Sized>(
        hidden_word: &[char],
        difficulty: Difficulty,
        size: usize,
        rng: &mut R,
    ) -> Grid {
        match difficulty.noise() {
            Noise::Alphabet => Grid::filled(size, |_, _| rng.random_range(b'a'..=b'z') as char),
            Noise::HiddenWord => {
                Grid::filled(size, |_, _| hidden_word[rng.random_range(0..hidden_word.len())])
            }
        }
    }

    /// Write the word at a random position and in a random direction, and return that
    /// placement.
    ///
    /// Random candidates are drawn until one fits in the grid. The grid is only modified once a
    /// fitting candidate is found. The number of attempts is not bounded, but because the grid
    /// is at least twice as large as the word, at least half of the candidates fit.
    fn place_word<R: Rng + ?Sized>(hidden_word: &[char], grid: &mut Grid, rng: &mut R) -> Placement {
        let size: usize = grid.size();
        let mut attempts: usize = 0;
        loop {
            attempts += 1;
            let direction: Direction = Direction::random(rng);
            let row: usize = rng.random_range(0..size);
            let col: usize = rng.random_range(0..size);
            let candidate: Placement = Placement::new(row, col, direction);

            let Some(cells) = candidate.path(hidden_word.len(), size) else {
                continue;
            };
            for (&(r, c), &letter) in cells.iter().zip(hidden_word) {
                grid.set(r, c, letter);
            }
            debug!("Word placed at row {row}, column {col}, going {direction} (attempts = {attempts})");
            return candidate;
        }
    }

    /// Whether reading the puzzle from the given cell in the given direction spells the hidden
    /// word.
    ///
    /// The guess is not compared with the actual placement of the word: any path that spells
    /// the word is accepted. With the `extreme` difficulty level, the noise letters come from
    /// the hidden word, and the word might therefore appear several times.
    ///
    /// # Errors
    ///
    /// The method returns [`JumbleError::OutOfBounds`] if the path leaves the puzzle.
    pub fn check_placement(
        &self,
        row: usize,
        col: usize,
        direction: Direction,
    ) -> Result<bool, JumbleError> {
        let size: usize = self.size();
        let cells: Vec<(usize, usize)> = Placement::new(row, col, direction)
            .path(self.hidden_word.len(), size)
            .ok_or(JumbleError::OutOfBounds {
                row,
                col,
                direction,
                size,
            })?;
        Ok(cells
            .iter()
            .zip(&self.hidden_word)
            .all(|(&cell, &letter)| self.grid[cell] == letter))
    }

    /// Return the number of rows (and columns) of the puzzle.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Return the row of the first letter of the hidden word.
    pub fn row_pos(&self) -> usize {
        self.placement.row
    }

    /// Return the column of the first letter of the hidden word.
    pub fn col_pos(&self) -> usize {
        self.placement.col
    }

    /// Return the reading direction of the hidden word.
    pub fn direction(&self) -> Direction {
        self.placement.direction
    }

    /// Return the placement of the hidden word.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Return the letters of the puzzle.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the hidden word.
    pub fn hidden_word(&self) -> String {
        self.hidden_word.iter().collect()
    }

    /// Return the difficulty level.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzle(word: &str, difficulty: &str, seed: u64) -> JumblePuzzle {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        JumblePuzzle::with_rng(word, difficulty, &mut rng).unwrap()
    }

    fn read_placement(p: &JumblePuzzle) -> String {
        p.placement()
            .path(p.hidden_word.len(), p.size())
            .unwrap()
            .into_iter()
            .map(|cell| p.grid()[cell])
            .collect()
    }

    #[test]
    fn cat_easy() {
        let p: JumblePuzzle = puzzle("cat", "easy", 1);
        assert_eq!(p.size(), 6);
        assert_eq!(p.grid().rows().count(), 6);
        assert_eq!(read_placement(&p), "cat");
        assert!(p.check_placement(p.row_pos(), p.col_pos(), p.direction()).unwrap());
    }

    #[test]
    fn single_letter_hard_uses_lowercase_noise() {
        for seed in 0..20 {
            let p: JumblePuzzle = puzzle("a", "hard", seed);
            assert_eq!(p.size(), 4);
            assert!(p.grid().rows().flatten().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn extreme_noise_comes_from_the_word() {
        for seed in 0..20 {
            let p: JumblePuzzle = puzzle("ox", "extreme", seed);
            assert_eq!(p.size(), 8);
            assert!(p.grid().rows().flatten().all(|&c| c == 'o' || c == 'x'));
        }
    }

    #[test]
    fn sizes_per_difficulty() {
        assert_eq!(puzzle("word", "easy", 3).size(), 8);
        assert_eq!(puzzle("word", "medium", 3).size(), 12);
        assert_eq!(puzzle("word", "hard", 3).size(), 16);
        assert_eq!(puzzle("word", "extreme", 3).size(), 16);
    }

    #[test]
    fn size_counts_characters() {
        let p: JumblePuzzle = puzzle("été", "easy", 5);
        assert_eq!(p.size(), 6);
        assert_eq!(read_placement(&p), "été");
        assert_eq!(p.hidden_word(), "été");
    }

    #[test]
    fn invalid_difficulty() {
        assert_eq!(
            JumblePuzzle::new("cat", "Easy"),
            Err(JumbleError::InvalidDifficulty {
                given: "Easy".to_string()
            })
        );
    }

    #[test]
    fn invalid_word() {
        assert_eq!(JumblePuzzle::new("", "medium"), Err(JumbleError::InvalidWord));
    }

    #[test]
    fn difficulty_is_verified_before_the_word() {
        assert_eq!(
            JumblePuzzle::new("", "nightmare"),
            Err(JumbleError::InvalidDifficulty {
                given: "nightmare".to_string()
            })
        );
    }

    #[test]
    fn same_seed_same_puzzle() {
        assert_eq!(puzzle("rust", "medium", 42), puzzle("rust", "medium", 42));
    }

    #[test]
    fn check_rejects_mismatching_letters() {
        let mut p: JumblePuzzle = puzzle("cat", "medium", 11);
        let (row, col, direction) = (p.row_pos(), p.col_pos(), p.direction());
        let last: (usize, usize) = p.placement().path(3, p.size()).unwrap()[2];
        p.grid_mut().set(last.0, last.1, 'q');
        assert_eq!(p.check_placement(row, col, direction), Ok(false));
    }

    #[test]
    fn check_accepts_coincidental_matches() {
        // With a single repeated letter and the extreme level, every cell is that letter
        let p: JumblePuzzle = puzzle("aa", "extreme", 4);
        assert!(p.grid().rows().flatten().all(|&c| c == 'a'));
        for direction in Direction::ALL {
            for row in 1..p.size() - 1 {
                for col in 1..p.size() - 1 {
                    assert_eq!(p.check_placement(row, col, direction), Ok(true));
                }
            }
        }
    }

    #[test]
    fn check_out_of_bounds() {
        let p: JumblePuzzle = puzzle("cat", "easy", 2);
        assert_eq!(
            p.check_placement(1, 0, Direction::North),
            Err(JumbleError::OutOfBounds {
                row: 1,
                col: 0,
                direction: Direction::North,
                size: 6
            })
        );
        assert!(p.check_placement(0, 4, Direction::East).is_err());
        assert!(p.check_placement(6, 0, Direction::South).is_err());
        assert!(p.check_placement(0, 1, Direction::West).is_err());
        assert!(p.check_placement(2, 0, Direction::North).is_ok());
    }

    #[test]
    fn clone_does_not_share_the_grid() {
        let original: JumblePuzzle = puzzle("copy", "hard", 8);
        let mut copy: JumblePuzzle = original.clone();
        assert_eq!(copy, original);
        assert_eq!(copy.placement(), original.placement());

        let before: char = original.grid()[(0, 0)];
        copy.grid_mut().set(0, 0, '#');
        assert_eq!(original.grid()[(0, 0)], before);
        assert_eq!(copy.grid()[(0, 0)], '#');
        assert_ne!(copy, original);
    }

    fn any_difficulty() -> impl Strategy<Value = Difficulty> {
        prop::sample::select(Difficulty::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn valid_inputs_always_build(word in "[a-z]{1,8}", difficulty in any_difficulty(), seed in any::<u64>()) {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let p: JumblePuzzle = JumblePuzzle::with_rng(&word, difficulty.name(), &mut rng).unwrap();

            prop_assert_eq!(p.size(), word.len() * difficulty.multiplier());
            prop_assert!(p.grid().rows().all(|r| r.len() == p.size()));
            prop_assert_eq!(read_placement(&p), word.clone());
            prop_assert_eq!(p.check_placement(p.row_pos(), p.col_pos(), p.direction()), Ok(true));
            if difficulty == Difficulty::Extreme {
                prop_assert!(p.grid().rows().flatten().all(|c| word.contains(*c)));
            } else {
                prop_assert!(p.grid().rows().flatten().all(|c| c.is_ascii_lowercase()));
            }
        }

        #[test]
        fn unknown_difficulties_are_rejected(word in "[a-z]{0,5}", difficulty in "[A-Za-z]{0,8}") {
            prop_assume!(Difficulty::ALL.iter().all(|d| d.name() != difficulty));
            prop_assert_eq!(
                JumblePuzzle::new(&word, &difficulty),
                Err(JumbleError::InvalidDifficulty { given: difficulty.clone() })
            );
        }
    }
}
