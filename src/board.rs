use crate::{Cell, CellValue, GameError, Position};
use itertools::iproduct;
use ndarray::Array2;
use rand::Rng;
use std::collections::BTreeSet;
use std::ops::{Index, IndexMut};

/// Radius (Chebyshev) around the first move in which no mine may be placed.
pub const ANCHOR_RADIUS: usize = 2;

/// The fixed-size grid of cells. Knows about bounds, neighbors and where mines
/// go, but nothing about counters or game progress.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: Array2::default((rows, cols)),
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    pub fn is_within_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn get_cell(&self, pos: Position) -> Result<&Cell, GameError> {
        self.cells
            .get([pos.row, pos.col])
            .ok_or(GameError::OutOfBounds(pos))
    }

    /// In-bounds neighbors of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        pos.neighbors().filter(|p| self.is_within_bounds(*p))
    }

    pub fn iter_positions(&self) -> impl Iterator<Item = Position> {
        iproduct!(0..self.rows(), 0..self.cols()).map(Position::from)
    }

    /// Turns `pos` into a mine and bumps the count of each non-mine neighbor.
    pub(crate) fn set_mine(&mut self, pos: Position) {
        self[pos].value = CellValue::Mine;

        let neighbors: Vec<Position> = self.neighbors(pos).collect();
        for neighbor in neighbors {
            let cell = &mut self[neighbor];
            if let CellValue::Adjacent(count) = cell.value {
                cell.value = CellValue::Adjacent(count + 1);
            }
        }
    }

    /// Rejection-samples `count` distinct mine positions, none within
    /// [`ANCHOR_RADIUS`] of `anchor`, and writes them into the grid.
    ///
    /// Small dense boards may not have `count` cells outside that radius; the
    /// exclusion then shrinks to the anchor's immediate neighbors, which a
    /// valid [`BoardConfig`](crate::BoardConfig) always leaves room for.
    pub(crate) fn place_mines<R: Rng>(
        &mut self,
        anchor: Position,
        count: usize,
        rng: &mut R,
    ) -> BTreeSet<Position> {
        let radius = self.exclusion_radius(anchor, count);
        let mut mines = BTreeSet::new();
        let mut rejected = 0usize;

        while mines.len() < count {
            let pos = Position::new(rng.gen_range(0..self.rows()), rng.gen_range(0..self.cols()));

            if pos.chebyshev_distance(anchor) <= radius || !mines.insert(pos) {
                rejected += 1;
                continue;
            }
            self.set_mine(pos);
        }

        log::debug!(
            "Placed {} mines around anchor {:?} ({} samples rejected)",
            count,
            anchor,
            rejected
        );
        mines
    }

    fn exclusion_radius(&self, anchor: Position, count: usize) -> usize {
        let available = self
            .iter_positions()
            .filter(|p| p.chebyshev_distance(anchor) > ANCHOR_RADIUS)
            .count();
        if available >= count {
            ANCHOR_RADIUS
        } else {
            log::warn!(
                "Only {} cells lie outside the opening around {:?} but {} mines are needed, shrinking it to the adjacent cells",
                available,
                anchor,
                count
            );
            1
        }
    }
}

impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[[pos.row, pos.col]]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[[pos.row, pos.col]]
    }
}
