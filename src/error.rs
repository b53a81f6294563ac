use crate::Position;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position {0:?} is out of bounds")]
    OutOfBounds(Position),
    #[error("Board dimensions {rows}x{cols} must both be greater than zero")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Mine count {mines} is invalid for board size {rows}x{cols} (need 0 < mines < {rows}*{cols} - 9)")]
    InvalidMineCount {
        rows: usize,
        cols: usize,
        mines: usize,
    },
    #[error("Mine layout has {actual} mines but the board expects {expected}")]
    MineLayoutMismatch { expected: usize, actual: usize },
    #[error("Mine at {0:?} was listed more than once")]
    DuplicateMine(Position),
    #[error("Unknown difficulty {0:?}")]
    UnknownDifficulty(String),
}
