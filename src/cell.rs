use serde::{Deserialize, Serialize};

/// What a cell holds: a mine, or the number of mines among its 8 neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellValue {
    Mine,
    Adjacent(u8),
}

impl CellValue {
    pub fn is_mine(self) -> bool {
        matches!(self, CellValue::Mine)
    }

    pub fn is_open_space(self) -> bool {
        matches!(self, CellValue::Adjacent(0))
    }
}

impl Default for CellValue {
    fn default() -> Self {
        CellValue::Adjacent(0)
    }
}

/// Visibility of a cell to the player. A revealed cell can never carry a flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Flagged,
    Revealed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: CellValue,
    pub visibility: Visibility,
}

impl Cell {
    pub fn is_revealed(&self) -> bool {
        self.visibility == Visibility::Revealed
    }

    pub fn is_flagged(&self) -> bool {
        self.visibility == Visibility::Flagged
    }

    pub fn is_mine(&self) -> bool {
        self.value.is_mine()
    }
}
