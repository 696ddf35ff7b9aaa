//! Board representation: the letter grid, cell positions and search paths.
//!
//! A board is built once from a row-major tile list and never changes
//! afterwards. Tiles are opaque lowercase strings, so a two-letter "qu"
//! cube is just another tile.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::BoggleError;

/// Rows on a standard board
pub const STANDARD_ROWS: usize = 4;
/// Columns on a standard board
pub const STANDARD_COLS: usize = 4;

/// Position on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset by a signed delta, `None` if either axis would go negative.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

/// An immutable `rows x cols` grid of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major tiles, lowercased
    tiles: Vec<String>,
}

impl Board {
    /// Build a board from exactly `rows * cols` tiles in row-major order.
    pub fn new<I, S>(rows: usize, cols: usize, tiles: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if rows == 0 || cols == 0 {
            return Err(BoggleError::EmptyBoard);
        }
        let expected = rows
            .checked_mul(cols)
            .ok_or(BoggleError::BoardTooLarge { rows, cols })?;
        let tiles: Vec<String> = tiles
            .into_iter()
            .map(|t| t.as_ref().trim().to_lowercase())
            .collect();
        if tiles.len() != expected {
            return Err(BoggleError::InvalidBoardSize {
                rows,
                cols,
                expected,
                actual: tiles.len(),
            });
        }
        Ok(Self { rows, cols, tiles })
    }

    /// Build a standard 4x4 board.
    pub fn standard<I, S>(tiles: I) -> Result<Self, BoggleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(STANDARD_ROWS, STANDARD_COLS, tiles)
    }

    /// Build a board from user-typed letters.
    ///
    /// Input containing commas or whitespace is split on them so multi-letter
    /// tiles can be written (`"qu,a,b,..."`); otherwise every character is
    /// one tile.
    pub fn parse(rows: usize, cols: usize, letters: &str) -> Result<Self, BoggleError> {
        let letters = letters.trim();
        if letters.contains(|c: char| c == ',' || c.is_whitespace()) {
            let tiles = letters
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|t| !t.is_empty());
            Self::new(rows, cols, tiles)
        } else {
            Self::new(rows, cols, letters.chars().map(String::from))
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the tile at a position (bounds-checked)
    pub fn tile_at(&self, pos: Position) -> Result<&str, BoggleError> {
        if !self.contains(pos) {
            return Err(BoggleError::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.tiles[pos.row * self.cols + pos.col])
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Iterate the rows as tile slices
    pub fn tile_rows(&self) -> impl Iterator<Item = &[String]> + '_ {
        self.tiles.chunks(self.cols)
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }
}

/// Tile lookup used on the search hot path.
///
/// # Panics
///
/// Panics with the [`BoggleError::OutOfBounds`] message if `pos` is off the
/// board. Only reachable through an adjacency bug.
impl Index<Position> for Board {
    type Output = str;

    fn index(&self, pos: Position) -> &str {
        match self.tile_at(pos) {
            Ok(tile) => tile,
            Err(err) => panic!("{err}"),
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.tile_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|t| format!("{t:>2}")).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// A simple path through the board: no position appears twice.
#[derive(Debug, Clone)]
pub struct Path {
    cells: Vec<Position>,
    visited: Vec<bool>,
    cols: usize,
}

impl Path {
    /// Create an empty path sized for `board`
    pub fn new(board: &Board) -> Self {
        Self {
            cells: Vec::with_capacity(board.cell_count()),
            visited: vec![false; board.cell_count()],
            cols: board.cols(),
        }
    }

    fn slot(&self, pos: Position) -> Option<usize> {
        if pos.col >= self.cols {
            return None;
        }
        let idx = pos.row.checked_mul(self.cols)?.checked_add(pos.col)?;
        (idx < self.visited.len()).then_some(idx)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.slot(pos).map_or(false, |idx| self.visited[idx])
    }

    /// Extend the path. Returns `false` (and leaves the path alone) if the
    /// position is already on it or off the board.
    pub fn push(&mut self, pos: Position) -> bool {
        match self.slot(pos) {
            Some(idx) if !self.visited[idx] => {
                self.visited[idx] = true;
                self.cells.push(pos);
                true
            }
            _ => false,
        }
    }

    pub fn pop(&mut self) -> Option<Position> {
        let pos = self.cells.pop()?;
        if let Some(idx) = self.slot(pos) {
            self.visited[idx] = false;
        }
        Some(pos)
    }

    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn last(&self) -> Option<Position> {
        self.cells.last().copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abcd() -> Board {
        Board::new(2, 2, ["A", "b", "Qu", "d"]).unwrap()
    }

    #[test]
    fn test_board_size_checked() {
        let err = Board::standard(["a"; 15]).unwrap_err();
        assert_eq!(
            err,
            BoggleError::InvalidBoardSize {
                rows: 4,
                cols: 4,
                expected: 16,
                actual: 15
            }
        );
        assert!(Board::standard(["a"; 17]).is_err());
        assert!(Board::standard(["a"; 16]).is_ok());
        assert_eq!(
            Board::new(0, 4, Vec::<String>::new()).unwrap_err(),
            BoggleError::EmptyBoard
        );
    }

    #[test]
    fn test_board_too_large() {
        assert_eq!(
            Board::new(usize::MAX, 2, ["a"; 2]).unwrap_err(),
            BoggleError::BoardTooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
        let half = usize::MAX / 2 + 1;
        assert!(matches!(
            Board::new(half, 2, Vec::<String>::new()),
            Err(BoggleError::BoardTooLarge { .. })
        ));
    }

    #[test]
    fn test_path_ignores_huge_positions() {
        let board = abcd();
        let mut path = Path::new(&board);
        let far = Position::new(usize::MAX, 1);
        assert!(!path.contains(far));
        assert!(!path.push(far));
        assert!(path.is_empty());
    }

    #[test]
    fn test_non_square_board() {
        let board = Board::new(2, 3, ["a", "b", "c", "d", "e", "f"]).unwrap();
        assert_eq!(board.dimensions(), (2, 3));
        assert_eq!(&board[Position::new(1, 2)], "f");
        assert_eq!(board.positions().count(), 6);
    }

    #[test]
    fn test_tiles_lowercased() {
        let board = abcd();
        assert_eq!(board.tile_at(Position::new(0, 0)).unwrap(), "a");
        assert_eq!(board.tile_at(Position::new(1, 0)).unwrap(), "qu");
    }

    #[test]
    fn test_tile_at_out_of_bounds() {
        let board = abcd();
        assert!(matches!(
            board.tile_at(Position::new(2, 0)),
            Err(BoggleError::OutOfBounds { .. })
        ));
        assert!(matches!(
            board.tile_at(Position::new(0, 2)),
            Err(BoggleError::OutOfBounds { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let board = abcd();
        let _ = &board[Position::new(5, 5)];
    }

    #[test]
    fn test_parse_letters() {
        let board = Board::parse(2, 2, "cats").unwrap();
        assert_eq!(board.tiles(), &["c", "a", "t", "s"]);

        let board = Board::parse(2, 2, "qu, a ,b,c").unwrap();
        assert_eq!(board.tiles(), &["qu", "a", "b", "c"]);

        assert!(Board::parse(2, 2, "cat").is_err());
    }

    #[test]
    fn test_path_rejects_revisit() {
        let board = abcd();
        let mut path = Path::new(&board);
        assert!(path.push(Position::new(0, 0)));
        assert!(path.push(Position::new(1, 1)));
        assert!(!path.push(Position::new(0, 0)));
        assert!(!path.push(Position::new(0, 2)));
        assert_eq!(path.len(), 2);
        assert!(path.contains(Position::new(1, 1)));

        assert_eq!(path.pop(), Some(Position::new(1, 1)));
        assert!(!path.contains(Position::new(1, 1)));
        assert!(path.push(Position::new(1, 1)));
    }

    #[test]
    fn test_display_rows() {
        assert_eq!(abcd().to_string(), " a  b\nqu  d");
    }

    #[test]
    fn test_position_offset() {
        let p = Position::new(0, 1);
        assert_eq!(p.offset(-1, 0), None);
        assert_eq!(p.offset(1, -1), Some(Position::new(1, 0)));
    }
}
