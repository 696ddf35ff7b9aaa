//! Depth-first word enumeration over a board.
//!
//! [`WordSearch`] walks every simple path from every start cell under every
//! configured [`Adjacency`], checks each extended prefix against the
//! dictionary and yields newly discovered words one at a time. The walk is
//! driven by an explicit frame stack, so dropping the iterator early simply
//! drops the stack.

use std::collections::{BTreeSet, HashSet};
use std::time::Instant;

use log::debug;
use serde::Serialize;

use crate::adjacency::{Adjacency, Movement, Neighbors};
use crate::board::{Board, Path, Position};
use crate::dictionary::Dictionary;

/// Configuration for a search
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Shortest accepted word, counted in tiles
    pub min_length: usize,
    /// Which movement rules to walk with
    pub movement: Movement,
    /// Stop extending prefixes the dictionary says no word begins with
    pub prune_prefixes: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_length: 3,
            movement: Movement::Separate,
            prune_prefixes: false,
        }
    }
}

/// A word together with the path that first spelled it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundWord {
    pub word: String,
    pub path: Vec<Position>,
}

/// Materialized result of a full search
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Discovered words, sorted
    pub words: Vec<String>,
    pub count: usize,
    /// Number of path extensions checked against the dictionary
    pub paths_explored: usize,
    pub time_elapsed_ms: u64,
}

/// One level of the depth-first walk
#[derive(Debug)]
struct SearchFrame {
    neighbors: Neighbors,
    next: usize,
    /// Prefix length to restore when this frame is popped
    restore_len: usize,
}

/// Lazy, single-use enumeration of the words on a board.
///
/// Each word is yielded at most once, in discovery order. A finished (or
/// abandoned) search cannot be restarted; build a new one instead.
pub struct WordSearch<'a, D: ?Sized> {
    board: &'a Board,
    dictionary: &'a D,
    strategies: &'a [Adjacency],
    min_length: usize,
    prune_prefixes: bool,
    /// Next (start cell, strategy) pair to begin a walk from
    start: usize,
    strategy: usize,
    current: Adjacency,
    stack: Vec<SearchFrame>,
    path: Path,
    prefix: String,
    found: HashSet<String>,
    paths_explored: usize,
}

impl<'a, D: Dictionary + ?Sized> WordSearch<'a, D> {
    /// Search `board` with the movement rules and minimum length in `config`.
    pub fn new(board: &'a Board, dictionary: &'a D, config: &SearchConfig) -> Self {
        Self::with_strategies(
            board,
            dictionary,
            config.movement.strategies(),
            config.min_length,
            config.prune_prefixes,
        )
    }

    /// Search with an explicit set of strategies, each run from every start cell.
    pub fn with_strategies(
        board: &'a Board,
        dictionary: &'a D,
        strategies: &'a [Adjacency],
        min_length: usize,
        prune_prefixes: bool,
    ) -> Self {
        debug!(
            "searching {}x{} board with {:?}, min length {}",
            board.rows(),
            board.cols(),
            strategies,
            min_length
        );
        Self {
            board,
            dictionary,
            strategies,
            min_length,
            prune_prefixes,
            start: 0,
            strategy: 0,
            current: Adjacency::Orthogonal,
            stack: Vec::new(),
            path: Path::new(board),
            prefix: String::new(),
            found: HashSet::new(),
            paths_explored: 0,
        }
    }

    /// Path extensions checked so far
    pub fn paths_explored(&self) -> usize {
        self.paths_explored
    }

    /// Words yielded so far
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    /// Begin the next (start cell, strategy) walk. Returns `false` when every
    /// pair has been walked.
    fn begin_next_walk(&mut self) -> bool {
        if self.strategies.is_empty() || self.start >= self.board.cell_count() {
            return false;
        }
        let cols = self.board.cols();
        let pos = Position::new(self.start / cols, self.start % cols);
        self.current = self.strategies[self.strategy];

        self.strategy += 1;
        if self.strategy == self.strategies.len() {
            self.strategy = 0;
            self.start += 1;
        }

        debug_assert!(self.path.is_empty() && self.prefix.is_empty());
        self.path.push(pos);
        self.prefix.push_str(&self.board[pos]);
        let neighbors = self
            .current
            .neighbors(pos, self.board.dimensions(), &self.path);
        self.stack.push(SearchFrame {
            neighbors,
            next: 0,
            restore_len: 0,
        });
        true
    }

    /// Is the current prefix a word we have not reported yet?
    fn accepts_current(&self) -> bool {
        self.path.len() >= self.min_length
            && !self.found.contains(&self.prefix)
            && self.dictionary.is_valid(&self.prefix)
    }
}

impl<'a, D: Dictionary + ?Sized> Iterator for WordSearch<'a, D> {
    type Item = FoundWord;

    fn next(&mut self) -> Option<FoundWord> {
        loop {
            let Some(frame) = self.stack.last_mut() else {
                if !self.begin_next_walk() {
                    debug!(
                        "search finished: {} words, {} paths explored",
                        self.found.len(),
                        self.paths_explored
                    );
                    return None;
                }
                continue;
            };

            // Frame exhausted: step back along the path
            if frame.next >= frame.neighbors.len() {
                let restore_len = frame.restore_len;
                self.stack.pop();
                self.path.pop();
                self.prefix.truncate(restore_len);
                continue;
            }

            let pos = frame.neighbors[frame.next];
            frame.next += 1;

            let restore_len = self.prefix.len();
            self.path.push(pos);
            self.prefix.push_str(&self.board[pos]);
            self.paths_explored += 1;

            let discovered = if self.accepts_current() {
                self.found.insert(self.prefix.clone());
                Some(FoundWord {
                    word: self.prefix.clone(),
                    path: self.path.cells().to_vec(),
                })
            } else {
                None
            };

            // Validity never stops the walk; only the optional prefix check does.
            if self.prune_prefixes && !self.dictionary.is_valid_prefix(&self.prefix) {
                self.path.pop();
                self.prefix.truncate(restore_len);
            } else {
                let neighbors = self
                    .current
                    .neighbors(pos, self.board.dimensions(), &self.path);
                self.stack.push(SearchFrame {
                    neighbors,
                    next: 0,
                    restore_len,
                });
            }

            if discovered.is_some() {
                return discovered;
            }
        }
    }
}

/// Start a lazy search of `board`.
pub fn find_words<'a, D: Dictionary + ?Sized>(
    board: &'a Board,
    dictionary: &'a D,
    config: &SearchConfig,
) -> WordSearch<'a, D> {
    WordSearch::new(board, dictionary, config)
}

/// Run a full search and collect the sorted word set.
pub fn solve<D: Dictionary + ?Sized>(
    board: &Board,
    dictionary: &D,
    config: &SearchConfig,
) -> SolveResult {
    let start_time = Instant::now();
    let mut search = WordSearch::new(board, dictionary, config);
    let words: BTreeSet<String> = search.by_ref().map(|found| found.word).collect();

    SolveResult {
        count: words.len(),
        words: words.into_iter().collect(),
        paths_explored: search.paths_explored(),
        time_elapsed_ms: start_time.elapsed().as_millis() as u64,
    }
}
