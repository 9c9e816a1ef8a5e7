/*
cli_options.rs

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

//! Process command-line options and run the game.
//!
//! # Examples
//!
//! Hide a word and look for it interactively:
//!
//! ```text
//! $ jumble rust medium
//! ```
//!
//! Prompt for the word and the difficulty level:
//!
//! ```text
//! $ jumble
//! Word to hide: rust
//! Difficulty (easy, medium, hard, extreme): hard
//! ```
//!
//! Build a reproducible puzzle, print it as JSON with the solution, and exit:
//!
//! ```text
//! $ jumble rust extreme --seed 42 --json --reveal
//! ```
//!
//! Verify a single guess. The exit code is 0 when the guess spells the word:
//!
//! ```text
//! $ jumble rust easy --seed 42 --guess 3 1 s
//! ```

use clap::{Parser, ValueEnum};
use log::{LevelFilter, error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use std::error::Error;
use std::io::{self, BufRead, ErrorKind, Write};
use std::process::ExitCode;

use jumble::config::{COPYRIGHT_NOTICE, PKGNAME};
use jumble::player_input::{Guess, Outcome, Session};
use jumble::{Difficulty, JumbleError, JumblePuzzle, Placement};

/// Exit code when the word is found.
const EXIT_FOUND: u8 = 0;

/// Exit code when the word is not found.
const EXIT_NOT_FOUND: u8 = 1;

/// Exit code when the puzzle cannot be built or the guess does not fit in the puzzle.
const EXIT_USAGE: u8 = 2;

/// Hide a word in a grid of letters and find it.
#[derive(Parser, Debug)]
#[command(name = PKGNAME, about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Word to hide. Prompted when missing
    word: Option<String>,

    /// Difficulty level: easy, medium, hard, or extreme (case sensitive). Prompted when missing
    difficulty: Option<String>,

    /// Seed for the random number generator, to build the same puzzle again
    #[arg(short, long)]
    seed: Option<u64>,

    /// Verify a single guess instead of playing interactively
    #[arg(short, long, num_args = 3, value_names = ["ROW", "COL", "DIR"], allow_hyphen_values = true)]
    guess: Option<Vec<String>>,

    /// Print the puzzle in JSON format and exit
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Also print where the word is hidden
    #[arg(short, long, default_value_t = false)]
    reveal: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// JSON representation of a puzzle.
#[derive(Serialize, Debug)]
struct PuzzleReport {
    size: usize,
    difficulty: Difficulty,
    rows: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    placement: Option<Placement>,
}

impl PuzzleReport {
    /// Create a [`PuzzleReport`] object. The solution is only included when `reveal` is set.
    fn new(puzzle: &JumblePuzzle, reveal: bool) -> Self {
        Self {
            size: puzzle.size(),
            difficulty: puzzle.difficulty(),
            rows: puzzle.grid().row_strings(),
            word: reveal.then(|| puzzle.hidden_word()),
            placement: reveal.then(|| puzzle.placement()),
        }
    }
}

/// Parse the command-line options and run the game.
pub fn run() -> ExitCode {
    let args: Args = Args::parse();

    let mut builder = env_logger::Builder::from_default_env();
    if args.debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    match execute(args, &mut stdin.lock(), &mut stdout.lock()) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Build the puzzle, display it, and then verify the guess or start the guessing session.
///
/// Return the process exit code.
fn execute<R: BufRead, W: Write>(
    args: Args,
    input: &mut R,
    output: &mut W,
) -> Result<u8, Box<dyn Error>> {
    let word: String = match args.word {
        Some(w) => w,
        None => prompt(input, output, "Word to hide: ")?,
    };
    let difficulty: String = match args.difficulty {
        Some(d) => d,
        None => {
            let names: Vec<String> = Difficulty::value_variants()
                .iter()
                .filter_map(|d| d.to_possible_value())
                .map(|v| v.get_name().to_string())
                .collect();
            prompt(input, output, &format!("Difficulty ({}): ", names.join(", ")))?
        }
    };

    let built: Result<JumblePuzzle, JumbleError> = match args.seed {
        Some(seed) => {
            JumblePuzzle::with_rng(&word, &difficulty, &mut StdRng::seed_from_u64(seed))
        }
        None => JumblePuzzle::new(&word, &difficulty),
    };
    let puzzle: JumblePuzzle = match built {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{e}");
            return Ok(EXIT_USAGE);
        }
    };
    info!(
        "Puzzle {size}x{size} ready ({})",
        puzzle.difficulty(),
        size = puzzle.size()
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *output, &PuzzleReport::new(&puzzle, args.reveal))?;
        writeln!(output)?;
    } else {
        write!(output, "{}", puzzle.grid())?;
        if args.reveal {
            writeln!(
                output,
                "Solution: row {}, column {}, going {}",
                puzzle.row_pos(),
                puzzle.col_pos(),
                puzzle.direction()
            )?;
        }
    }

    if let Some(parts) = args.guess {
        let guess: Guess = parts.join(" ").parse()?;
        return match puzzle.check_placement(guess.row, guess.col, guess.direction) {
            Ok(true) => {
                writeln!(output, "Found!")?;
                Ok(EXIT_FOUND)
            }
            Ok(false) => {
                writeln!(output, "Not found.")?;
                Ok(EXIT_NOT_FOUND)
            }
            Err(e) => {
                eprintln!("{e}");
                Ok(EXIT_USAGE)
            }
        };
    }
    if args.json {
        return Ok(EXIT_FOUND);
    }

    match Session::new(&puzzle).play(&mut *input, &mut *output)? {
        Outcome::Found { .. } => Ok(EXIT_FOUND),
        Outcome::GaveUp { .. } | Outcome::Aborted { .. } => Ok(EXIT_NOT_FOUND),
    }
}

/// Display the message and return the line entered by the user.
fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> io::Result<String> {
    write!(output, "{message}")?;
    output.flush()?;
    let mut line: String = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(ErrorKind::UnexpectedEof, "no input"));
    }
    Ok(line.trim().to_string())
}
