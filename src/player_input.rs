/*
player_input.rs

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

//! Manage the player's guesses.
//!
//! A [`Guess`] is read from a line such as `3 4 n` (row 3, column 4, reading north).
//! A [`Session`] repeatedly prompts the player for guesses until the hidden word is found, the
//! player gives up, or the input ends.

use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use std::time::{Duration, Instant};

use crate::error::JumbleError;
use crate::generator::direction::Direction;
use crate::generator::jumble::JumblePuzzle;

/// Words that the player can enter to give up and reveal the hidden word.
const GIVE_UP: [&str; 2] = ["q", "quit"];

/// Position and direction proposed by the player.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Guess {
    /// Row of the first letter.
    pub row: usize,

    /// Column of the first letter.
    pub col: usize,

    /// Reading direction.
    pub direction: Direction,
}

/// Parse a guess in the `ROW COLUMN DIRECTION` format.
/// The three parts can be separated by spaces or commas.
impl FromStr for Guess {
    type Err = JumbleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || JumbleError::InvalidGuess {
            given: s.trim().to_string(),
        };
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();
        let [row, col, direction] = parts.as_slice() else {
            return Err(invalid());
        };
        Ok(Self {
            row: row.parse().map_err(|_| invalid())?,
            col: col.parse().map_err(|_| invalid())?,
            direction: direction.parse()?,
        })
    }
}

/// How a [`Session`] ended.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The player found the hidden word.
    Found {
        /// Number of guesses, including the correct one.
        attempts: usize,

        /// Time spent looking for the word.
        duration: Duration,
    },

    /// The player gave up and the placement was revealed.
    GaveUp {
        /// Number of wrong guesses.
        attempts: usize,
    },

    /// The input ended before the word was found.
    Aborted {
        /// Number of wrong guesses.
        attempts: usize,
    },
}

/// Guessing session for one puzzle.
pub struct Session<'a> {
    /// Puzzle being solved.
    puzzle: &'a JumblePuzzle,

    /// Number of guesses that have been verified so far. Guesses that cannot be parsed or that
    /// leave the puzzle are not counted.
    attempts: usize,

    /// Time when the session started. Used to compute the duration.
    start: Instant,
}

impl<'a> Session<'a> {
    /// Create a [`Session`] object.
    pub fn new(puzzle: &'a JumblePuzzle) -> Self {
        Self {
            puzzle,
            attempts: 0,
            start: Instant::now(),
        }
    }

    /// Return the number of guesses verified so far.
    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Verify a guess and return whether it spells the hidden word.
    ///
    /// # Errors
    ///
    /// The method returns [`JumbleError::OutOfBounds`] if the guess leaves the puzzle. In that
    /// case, the guess is not counted.
    pub fn submit(&mut self, guess: Guess) -> Result<bool, JumbleError> {
        let found: bool = self
            .puzzle
            .check_placement(guess.row, guess.col, guess.direction)?;
        self.attempts += 1;
        debug!("Guess {guess:?}: found = {found} (attempt {})", self.attempts);
        Ok(found)
    }

    /// Prompt the player on `output` and read guesses from `input` until the session ends.
    ///
    /// # Errors
    ///
    /// The method returns an error when reading or writing fails.
    pub fn play<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<Outcome> {
        self.start = Instant::now();
        let mut line: String = String::new();
        loop {
            write!(
                output,
                "Guess (row column direction [n/e/s/w]), or 'q' to give up: "
            )?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                info!("Input closed after {} guesses", self.attempts);
                return Ok(Outcome::Aborted {
                    attempts: self.attempts,
                });
            }

            let entry: &str = line.trim();
            if entry.is_empty() {
                continue;
            }
            if GIVE_UP.iter().any(|g| entry.eq_ignore_ascii_case(g)) {
                let p = self.puzzle.placement();
                writeln!(
                    output,
                    "The word '{}' starts at row {}, column {}, going {}.",
                    self.puzzle.hidden_word(),
                    p.row,
                    p.col,
                    p.direction
                )?;
                return Ok(Outcome::GaveUp {
                    attempts: self.attempts,
                });
            }

            let guess: Guess = match entry.parse() {
                Ok(g) => g,
                Err(e) => {
                    writeln!(output, "{e}")?;
                    continue;
                }
            };
            match self.submit(guess) {
                Ok(true) => {
                    let duration: Duration = self.start.elapsed();
                    writeln!(
                        output,
                        "You found '{}' in {} guess(es) and {:.1} seconds.",
                        self.puzzle.hidden_word(),
                        self.attempts,
                        duration.as_secs_f32()
                    )?;
                    return Ok(Outcome::Found {
                        attempts: self.attempts,
                        duration,
                    });
                }
                Ok(false) => writeln!(output, "Not there, try again.")?,
                Err(e) => writeln!(output, "{e}")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn puzzle() -> JumblePuzzle {
        let mut rng: StdRng = StdRng::seed_from_u64(2025);
        JumblePuzzle::with_rng("rust", "easy", &mut rng).unwrap()
    }

    fn answer(p: &JumblePuzzle) -> String {
        format!("{} {} {}", p.row_pos(), p.col_pos(), p.direction().symbol())
    }

    /// Return a guess that fits in the puzzle but does not spell the word.
    fn wrong_answer(p: &JumblePuzzle) -> String {
        for direction in Direction::ALL {
            for row in 0..p.size() {
                for col in 0..p.size() {
                    if p.check_placement(row, col, direction) == Ok(false) {
                        return format!("{row} {col} {}", direction.symbol());
                    }
                }
            }
        }
        panic!("every path spells the hidden word");
    }

    #[test]
    fn parse_guess() {
        assert_eq!(
            "3 4 n".parse::<Guess>(),
            Ok(Guess {
                row: 3,
                col: 4,
                direction: Direction::North
            })
        );
        assert_eq!(
            " 10,2, west ".parse::<Guess>(),
            Ok(Guess {
                row: 10,
                col: 2,
                direction: Direction::West
            })
        );
    }

    #[test]
    fn parse_invalid_guess() {
        assert_eq!(
            "3 n".parse::<Guess>(),
            Err(JumbleError::InvalidGuess {
                given: "3 n".to_string()
            })
        );
        assert!(matches!(
            "-1 2 s".parse::<Guess>(),
            Err(JumbleError::InvalidGuess { .. })
        ));
        assert!(matches!(
            "1 2 up".parse::<Guess>(),
            Err(JumbleError::InvalidDirection { .. })
        ));
        assert!("1 2 s extra".parse::<Guess>().is_err());
    }

    #[test]
    fn play_finds_the_word() {
        let p: JumblePuzzle = puzzle();
        let input: String = format!("\nnot a guess\n{}\n", answer(&p));
        let mut output: Vec<u8> = Vec::new();

        let outcome: Outcome = Session::new(&p).play(Cursor::new(input), &mut output).unwrap();

        assert!(matches!(outcome, Outcome::Found { attempts: 1, .. }));
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains("invalid guess 'not a guess'"));
        assert!(text.contains("You found 'rust' in 1 guess(es)"));
    }

    #[test]
    fn play_counts_wrong_guesses() {
        let p: JumblePuzzle = puzzle();
        let wrong: String = wrong_answer(&p);
        let input: String = format!("{wrong}\n{wrong}\n{}\n", answer(&p));
        let mut output: Vec<u8> = Vec::new();

        let outcome: Outcome = Session::new(&p).play(Cursor::new(input), &mut output).unwrap();

        assert!(matches!(outcome, Outcome::Found { attempts: 3, .. }));
        let text: String = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Not there, try again.").count(), 2);
    }

    #[test]
    fn play_reports_out_of_bounds_without_counting() {
        let p: JumblePuzzle = puzzle();
        let input: String = format!("0 0 n\n{}\n", answer(&p));
        let mut output: Vec<u8> = Vec::new();

        let outcome: Outcome = Session::new(&p).play(Cursor::new(input), &mut output).unwrap();

        assert!(matches!(outcome, Outcome::Found { attempts: 1, .. }));
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains("does not fit in the 8x8 puzzle"));
    }

    #[test]
    fn play_give_up_reveals_the_placement() {
        let p: JumblePuzzle = puzzle();
        let mut output: Vec<u8> = Vec::new();

        let outcome: Outcome = Session::new(&p)
            .play(Cursor::new("quit\n"), &mut output)
            .unwrap();

        assert_eq!(outcome, Outcome::GaveUp { attempts: 0 });
        let text: String = String::from_utf8(output).unwrap();
        assert!(text.contains(&format!(
            "The word 'rust' starts at row {}, column {}, going {}.",
            p.row_pos(),
            p.col_pos(),
            p.direction()
        )));
    }

    #[test]
    fn play_end_of_input() {
        let p: JumblePuzzle = puzzle();
        let mut output: Vec<u8> = Vec::new();
        let outcome: Outcome = Session::new(&p).play(Cursor::new(""), &mut output).unwrap();
        assert_eq!(outcome, Outcome::Aborted { attempts: 0 });
    }

    #[test]
    fn submit_counts_only_verified_guesses() {
        let p: JumblePuzzle = puzzle();
        let mut session: Session = Session::new(&p);
        let size: usize = p.size();
        assert!(
            session
                .submit(Guess {
                    row: size,
                    col: 0,
                    direction: Direction::East
                })
                .is_err()
        );
        assert_eq!(session.attempts(), 0);
        assert_eq!(
            session.submit(Guess {
                row: p.row_pos(),
                col: p.col_pos(),
                direction: p.direction()
            }),
            Ok(true)
        );
        assert_eq!(session.attempts(), 1);
    }
}
