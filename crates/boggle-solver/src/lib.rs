//! Boggle word finder.
//!
//! This crate enumerates every dictionary word that can be traced as a
//! path of adjacent tiles on a letter grid. The search is lazy: words are
//! produced one at a time as they are discovered, each exactly once.

pub mod adjacency;
pub mod board;
pub mod cubes;
pub mod dictionary;
pub mod error;
pub mod render;
pub mod search;

// Re-export main types
pub use adjacency::{Adjacency, Movement};
pub use board::{Board, Path, Position};
pub use dictionary::{Dictionary, SystemDictionary, WordList};
pub use error::BoggleError;
pub use search::{find_words, solve, FoundWord, SearchConfig, SolveResult, WordSearch};
