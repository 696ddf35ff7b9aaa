//! CLI entry point for the Boggle solver.
//!
//! Usage:
//!   boggle solve <LETTERS> [options]
//!   boggle new [options]
//!
//! Solve options:
//!   -d, --dict-file <FILE>    Newline-delimited word list
//!   -w, --dict-words <WORDS>  Words to use as the dictionary (repeatable, comma separated)
//!   -l, --dict-lang <LANG>    Installed spelling dictionary (default: en_US)
//!   --mixed                   Single eight-directional walk instead of two
//!   --word-min-length <n>     Shortest accepted word in tiles (default: 3)
//!   --prune-prefixes          Skip paths no dictionary word starts with
//!   --json                    Print the sorted result as JSON

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use env_logger::Env;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use boggle_solver::board::{STANDARD_COLS, STANDARD_ROWS};
use boggle_solver::cubes::{random_letters, roll_dice, DiceSet};
use boggle_solver::render::{board_code, render_board, WordPrinter};
use boggle_solver::{
    find_words, solve, Board, BoggleError, Dictionary, Movement, SearchConfig, SolveResult,
    SystemDictionary, WordList,
};

#[derive(Parser)]
#[command(name = "boggle")]
#[command(about = "Find every dictionary word on a Boggle board")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words that can be traced on a board
    Solve {
        /// Board tiles, one character each or separated by commas
        letters: String,

        /// Provide file as dictionary
        #[arg(short = 'd', long = "dict-file", value_name = "FILE")]
        dict_file: Option<PathBuf>,

        /// Provide words as dictionary
        #[arg(short = 'w', long = "dict-words", value_name = "WORDS")]
        dict_words: Vec<String>,

        /// Dictionary language code for the system spelling dictionary
        #[arg(short = 'l', long = "dict-lang", default_value = "en_US")]
        dict_lang: String,

        /// Navigate diagonally as well as sideways and up/down in one walk
        #[arg(long)]
        mixed: bool,

        /// Minimum length of a valid word, in tiles
        #[arg(long, default_value = "3")]
        word_min_length: usize,

        /// Stop following paths that no dictionary word begins with
        #[arg(long)]
        prune_prefixes: bool,

        /// Board rows
        #[arg(long, default_value_t = STANDARD_ROWS)]
        rows: usize,

        /// Board columns
        #[arg(long, default_value_t = STANDARD_COLS)]
        cols: usize,

        /// Print the board and dictionary details
        #[arg(short, long)]
        verbose: bool,

        /// Print words in capitalized form
        #[arg(short = 'C', long)]
        capitalize: bool,

        /// Line width for printed words (0 prints one per line)
        #[arg(long, default_value = "40")]
        wrap_length: usize,

        /// Print the sorted result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate letters for a new board
    New {
        /// Letters to place on the board
        #[arg(long, default_value = "")]
        letters: String,

        /// Preserve order of the letters
        #[arg(long)]
        ordered: bool,

        /// Generate a completely random board
        #[arg(long = "random")]
        random: bool,

        /// Roll the classic dice instead of the new ones
        #[arg(long)]
        classic: bool,

        /// Seed for a reproducible board
        #[arg(long)]
        seed: Option<u64>,

        /// Only print the letters
        #[arg(short = 'c', long = "print-code")]
        print_code: bool,

        /// Log details while generating
        #[arg(short, long)]
        verbose: bool,
    },
}

/// JSON output for a solved board
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    board: String,
    dictionary: String,
    movement: Movement,
    min_length: usize,
    #[serde(flatten)]
    result: SolveResult,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default)).init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Pick the dictionary backing: explicit words, then a file, then the system.
fn open_dictionary(
    dict_file: Option<&PathBuf>,
    dict_words: &[String],
    dict_lang: &str,
) -> Result<Box<dyn Dictionary>, BoggleError> {
    let words: Vec<&str> = dict_words
        .iter()
        .flat_map(|w| w.split(','))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect();
    if !words.is_empty() {
        return Ok(Box::new(WordList::new(words)?));
    }
    if let Some(path) = dict_file {
        return Ok(Box::new(WordList::from_file(path)?));
    }
    Ok(Box::new(SystemDictionary::for_language(dict_lang)?))
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve {
            letters,
            dict_file,
            dict_words,
            dict_lang,
            mixed,
            word_min_length,
            prune_prefixes,
            rows,
            cols,
            verbose,
            capitalize,
            wrap_length,
            json,
        } => {
            init_logging(verbose);

            let board = Board::parse(rows, cols, &letters).unwrap_or_else(|e| fail(e));
            let dictionary = open_dictionary(dict_file.as_ref(), &dict_words, &dict_lang)
                .unwrap_or_else(|e| fail(e));

            let config = SearchConfig {
                min_length: word_min_length,
                movement: Movement::from_mixed_flag(mixed),
                prune_prefixes,
            };

            if json {
                let output = SolveOutput {
                    board: board_code(&board),
                    dictionary: dictionary.description(),
                    movement: config.movement,
                    min_length: config.min_length,
                    result: solve(&board, &dictionary, &config),
                };
                match serde_json::to_string_pretty(&output) {
                    Ok(text) => println!("{}", text),
                    Err(e) => fail(e),
                }
                return;
            }

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if verbose {
                let header = writeln!(out, "{}", render_board(&board))
                    .and_then(|_| writeln!(out, "{}", dictionary.description()));
                if let Err(e) = header {
                    fail(e);
                }
            }

            let mut printer = WordPrinter::new(out, wrap_length, capitalize);
            for found in find_words(&board, &dictionary, &config) {
                if let Err(e) = printer.print(&found.word) {
                    fail(e);
                }
            }
            if let Err(e) = printer.finish() {
                fail(e);
            }
        }
        Commands::New {
            letters,
            ordered,
            random,
            classic,
            seed,
            print_code,
            verbose,
        } => {
            init_logging(verbose);

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let tiles = if random {
                random_letters(&letters, ordered, STANDARD_ROWS * STANDARD_COLS, &mut rng)
            } else {
                let set = if classic { DiceSet::Classic } else { DiceSet::New };
                roll_dice(set, &mut rng)
            };
            let board = Board::standard(tiles).unwrap_or_else(|e| fail(e));

            if print_code {
                println!(" {} ", board_code(&board).to_uppercase());
            } else {
                println!("{}", render_board(&board));
                println!("{}", board_code(&board));
            }
        }
    }
}
