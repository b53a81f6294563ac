use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// A grid coordinate, addressed `(row, col)` from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The up-to-8 surrounding positions that don't underflow the grid origin.
    /// Callers still have to filter against the far edges.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        iproduct!(-1isize..=1, -1isize..=1)
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .filter_map(move |(dr, dc)| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                Some(Position::new(row, col))
            })
    }

    /// Max of the row and column deltas.
    pub fn chebyshev_distance(&self, other: Position) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}
