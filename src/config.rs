use crate::GameError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cells around the first move (the move itself plus its 8 neighbors) that
/// must stay free of mines.
pub const SAFE_OPENING: usize = 9;

/// Validated board dimensions and mine count. Only obtainable through
/// [`BoardConfig::new`] or a [`Difficulty`] preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    rows: usize,
    cols: usize,
    mines: usize,
}

#[derive(Deserialize)]
struct RawBoardConfig {
    rows: usize,
    cols: usize,
    mines: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = GameError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        BoardConfig::new(raw.rows, raw.cols, raw.mines)
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize, mines: usize) -> Result<Self, GameError> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimensions { rows, cols });
        }

        let total = rows.saturating_mul(cols);
        if mines == 0 || mines.saturating_add(SAFE_OPENING) >= total {
            return Err(GameError::InvalidMineCount { rows, cols, mines });
        }

        Ok(Self { rows, cols, mines })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mines(&self) -> usize {
        self.mines
    }

    pub fn total_cells(&self) -> usize {
        self.rows * self.cols
    }

    pub fn safe_cells(&self) -> usize {
        self.total_cells() - self.mines
    }
}

/// The three standard tiers offered by a difficulty menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn config(self) -> BoardConfig {
        let (rows, cols, mines) = match self {
            Difficulty::Easy => (8, 8, 10),
            Difficulty::Medium => (16, 16, 40),
            Difficulty::Hard => (16, 30, 99),
        };
        BoardConfig { rows, cols, mines }
    }
}

impl From<Difficulty> for BoardConfig {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.config()
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GameError::UnknownDifficulty(s.to_string()))
    }
}
