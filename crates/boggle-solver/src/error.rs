//! Error types for board construction and dictionary loading.

use std::fmt;

use crate::board::Position;

/// Errors raised while building the inputs of a search.
///
/// A search itself never fails once its board and dictionary exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoggleError {
    /// The tile count does not match `rows * cols`.
    InvalidBoardSize {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
    /// Attempted to construct a board with zero rows or columns.
    EmptyBoard,
    /// `rows * cols` does not fit in `usize`.
    BoardTooLarge { rows: usize, cols: usize },
    /// A position outside the board was looked up.
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },
    /// The requested backing dictionary could not be constructed.
    DictionaryUnavailable {
        /// File path or language code that was requested.
        source: String,
        /// What went wrong.
        reason: String,
    },
}

impl BoggleError {
    pub(crate) fn dictionary(source: impl Into<String>, reason: impl fmt::Display) -> Self {
        Self::DictionaryUnavailable {
            source: source.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for BoggleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBoardSize {
                rows,
                cols,
                expected,
                actual,
            } => write!(
                f,
                "a {rows}x{cols} board needs {expected} tiles, got {actual}"
            ),
            Self::EmptyBoard => write!(f, "board must have at least one row and one column"),
            Self::BoardTooLarge { rows, cols } => {
                write!(f, "a {rows}x{cols} board has too many cells")
            }
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(
                f,
                "position ({}, {}) out of bounds for a {rows}x{cols} board",
                position.row, position.col
            ),
            Self::DictionaryUnavailable { source, reason } => {
                write!(f, "dictionary '{source}' unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for BoggleError {}
