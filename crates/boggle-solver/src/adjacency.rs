//! Movement rules deciding which cells are "next to" a given cell.
//!
//! Each [`Adjacency`] variant is a fixed offset table. The search engine asks
//! a strategy for the unvisited in-bounds neighbours of the current cell and
//! never branches on the variant itself.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Path, Position};

/// Edge-sharing offsets, in the order neighbours are produced.
const ORTHOGONAL: [(isize, isize); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// Corner-sharing offsets.
const DIAGONAL: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight surrounding cells, row-major.
const MIXED: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Neighbour list; never longer than eight.
pub type Neighbors = SmallVec<[Position; 8]>;

/// A single movement rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Adjacency {
    /// Up, down, left and right
    Orthogonal,
    /// The four corner-sharing cells only
    DiagonalOnly,
    /// Orthogonal and diagonal together
    Mixed,
}

impl Adjacency {
    fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Adjacency::Orthogonal => &ORTHOGONAL,
            Adjacency::DiagonalOnly => &DIAGONAL,
            Adjacency::Mixed => &MIXED,
        }
    }

    /// Upper bound on the number of neighbours this rule can return
    pub fn max_degree(self) -> usize {
        self.offsets().len()
    }

    /// Legal next cells from `pos` on a `rows x cols` board.
    ///
    /// Out-of-bounds cells and cells already on `visited` are excluded. The
    /// order is fixed per variant.
    pub fn neighbors(self, pos: Position, dimensions: (usize, usize), visited: &Path) -> Neighbors {
        let (rows, cols) = dimensions;
        self.offsets()
            .iter()
            .filter_map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|n| n.row < rows && n.col < cols && !visited.contains(*n))
            .collect()
    }
}

/// Which set of strategies a full-board search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Movement {
    /// Separate orthogonal and diagonal-only walks from every start cell
    #[default]
    Separate,
    /// One eight-directional walk from every start cell
    Mixed,
}

impl Movement {
    pub fn from_mixed_flag(mixed: bool) -> Self {
        if mixed {
            Movement::Mixed
        } else {
            Movement::Separate
        }
    }

    /// Strategies run from every start cell, in order
    pub fn strategies(self) -> &'static [Adjacency] {
        match self {
            Movement::Separate => &[Adjacency::Orthogonal, Adjacency::DiagonalOnly],
            Movement::Mixed => &[Adjacency::Mixed],
        }
    }
}
