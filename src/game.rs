use crate::{Board, BoardConfig, Cell, CellValue, Difficulty, GameError, Position, Visibility};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Reveal,
    Flag,
}

/// Result of a single [`Game::reveal`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell was already revealed; nothing changed.
    NoOp,
    MineHit,
    /// A zero cell was revealed and its surroundings flooded open.
    OpenSpace,
    Numbered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Revealed(RevealOutcome),
    Flagged(bool),
}

/// The minefield engine: owns the grid, the mine set and the counters, and
/// processes reveals and flag toggles for a single session.
///
/// Mines are placed lazily on the first reveal so that move and its
/// surroundings are always safe. Out-of-bounds coordinates are a caller bug
/// and panic; ordinary game outcomes come back as values.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    config: BoardConfig,
    mines: BTreeSet<Position>,
    placement_pending: bool,
    spaces_remaining: usize,
    flags_remaining: usize,
    detonated: Option<Position>,
    drain_first: Option<Position>,
    rng: StdRng,
}

impl Game {
    /// Panics if the dimensions or mine count are invalid.
    pub fn new(rows: usize, cols: usize, mines: usize) -> Self {
        Self::try_new(rows, cols, mines).unwrap_or_else(|e| panic!("{e}"))
    }

    pub fn try_new(rows: usize, cols: usize, mines: usize) -> Result<Self, GameError> {
        let config = BoardConfig::new(rows, cols, mines)?;
        Ok(Self::with_rng(config, StdRng::from_entropy()))
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: BoardConfig, rng: StdRng) -> Self {
        Self {
            board: Board::new(config.rows(), config.cols()),
            config,
            mines: BTreeSet::new(),
            placement_pending: true,
            spaces_remaining: config.safe_cells(),
            flags_remaining: config.mines(),
            detonated: None,
            drain_first: None,
            rng,
        }
    }

    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self::with_rng(difficulty.config(), StdRng::from_entropy())
    }

    /// Builds a game whose mines are fixed up front instead of being placed
    /// around the first move.
    pub fn with_mines(config: BoardConfig, mines: &[Position]) -> Result<Self, GameError> {
        if mines.len() != config.mines() {
            return Err(GameError::MineLayoutMismatch {
                expected: config.mines(),
                actual: mines.len(),
            });
        }

        let mut game = Self::with_rng(config, StdRng::from_entropy());
        for &pos in mines {
            if !game.board.is_within_bounds(pos) {
                return Err(GameError::OutOfBounds(pos));
            }
            if !game.mines.insert(pos) {
                return Err(GameError::DuplicateMine(pos));
            }
            game.board.set_mine(pos);
        }
        game.placement_pending = false;
        Ok(game)
    }

    pub fn perform_action(&mut self, pos: Position, action: Action) -> ActionOutcome {
        match action {
            Action::Reveal => ActionOutcome::Revealed(self.reveal(pos)),
            Action::Flag => ActionOutcome::Flagged(self.toggle_flag(pos)),
        }
    }

    /// Reveals `pos`, placing the mines first if this is the opening move.
    /// Flags don't protect a cell; a flagged cell that gets revealed loses its
    /// flag and the flag goes back to the pool.
    pub fn reveal(&mut self, pos: Position) -> RevealOutcome {
        self.check_bounds(pos);

        if self.placement_pending {
            self.mines = self
                .board
                .place_mines(pos, self.config.mines(), &mut self.rng);
            self.placement_pending = false;
        }

        let cell = self.board[pos];
        if cell.is_revealed() {
            return RevealOutcome::NoOp;
        }

        if cell.is_mine() {
            self.uncover(pos);
            if self.detonated.is_none() {
                self.detonated = Some(pos);
                self.drain_first = Some(pos);
            }
            log::debug!("Mine hit at {:?}", pos);
            return RevealOutcome::MineHit;
        }

        self.uncover(pos);
        self.spaces_remaining -= 1;

        let outcome = if cell.value.is_open_space() {
            let opened = self.flood_fill(pos);
            log::trace!("Flood fill from {:?} opened {} extra cells", pos, opened);
            RevealOutcome::OpenSpace
        } else {
            RevealOutcome::Numbered
        };

        if self.is_won() {
            log::debug!("All safe cells revealed");
        }
        outcome
    }

    /// Places or removes a flag. Returns whether anything changed.
    pub fn toggle_flag(&mut self, pos: Position) -> bool {
        self.check_bounds(pos);

        let cell = &mut self.board[pos];
        match cell.visibility {
            Visibility::Revealed => false,
            Visibility::Flagged => {
                cell.visibility = Visibility::Hidden;
                self.flags_remaining += 1;
                true
            }
            Visibility::Hidden if self.flags_remaining == 0 => false,
            Visibility::Hidden => {
                cell.visibility = Visibility::Flagged;
                self.flags_remaining -= 1;
                true
            }
        }
    }

    /// Takes one mine out of the mine set and reveals it, for animating the
    /// end of a game. The detonated mine comes out first, the rest in random
    /// order. `None` once every mine has been drained (or before any were
    /// placed).
    pub fn drain_next_mine(&mut self) -> Option<Position> {
        if self.mines.is_empty() {
            return None;
        }

        let pos = match self.drain_first.take() {
            Some(pos) if self.mines.contains(&pos) => pos,
            _ => {
                let index = self.rng.gen_range(0..self.mines.len());
                *self.mines.iter().nth(index)?
            }
        };

        self.mines.remove(&pos);
        self.uncover(pos);
        log::trace!("Drained mine at {:?}, {} left", pos, self.mines.len());
        Some(pos)
    }

    pub fn is_revealed(&self, pos: Position) -> bool {
        self.check_bounds(pos);
        self.board[pos].is_revealed()
    }

    pub fn is_flagged(&self, pos: Position) -> bool {
        self.check_bounds(pos);
        self.board[pos].is_flagged()
    }

    /// The stored value of a revealed cell; hidden cells read as
    /// `Adjacent(0)` so nothing leaks before they are shown.
    pub fn adjacency_value(&self, pos: Position) -> CellValue {
        self.check_bounds(pos);
        let cell = self.board[pos];
        if cell.is_revealed() {
            cell.value
        } else {
            CellValue::default()
        }
    }

    /// Checked lookup of the player-visible cell, for mapping untrusted input.
    pub fn cell(&self, pos: Position) -> Result<Cell, GameError> {
        let cell = *self.board.get_cell(pos)?;
        Ok(Cell {
            value: self.adjacency_value(pos),
            visibility: cell.visibility,
        })
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.board.is_within_bounds(pos)
    }

    pub fn flags_remaining(&self) -> usize {
        self.flags_remaining
    }

    pub fn spaces_remaining(&self) -> usize {
        self.spaces_remaining
    }

    pub fn total_mines(&self) -> usize {
        self.config.mines()
    }

    /// Mines still in the mine set, i.e. not yet drained.
    pub fn mines_left_to_drain(&self) -> usize {
        self.mines.len()
    }

    pub fn mines_placed(&self) -> bool {
        !self.placement_pending
    }

    pub fn rows(&self) -> usize {
        self.config.rows()
    }

    pub fn cols(&self) -> usize {
        self.config.cols()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.config.rows(), self.config.cols())
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn is_won(&self) -> bool {
        self.spaces_remaining == 0
    }

    pub fn is_lost(&self) -> bool {
        self.detonated.is_some()
    }

    /// The first mine revealed by [`Game::reveal`], if any.
    pub fn detonated_mine(&self) -> Option<Position> {
        self.detonated
    }

    pub fn state(&self) -> GameState {
        if self.is_lost() {
            GameState::Lost
        } else if self.is_won() {
            GameState::Won
        } else {
            GameState::Playing
        }
    }

    /// Marks a cell revealed, handing its flag back if it had one.
    fn uncover(&mut self, pos: Position) {
        let cell = &mut self.board[pos];
        if cell.is_flagged() {
            self.flags_remaining += 1;
        }
        cell.visibility = Visibility::Revealed;
    }

    /// Opens everything reachable from the zero cell at `origin` through other
    /// zero cells, plus their numbered border. Returns how many cells opened.
    fn flood_fill(&mut self, origin: Position) -> usize {
        let mut stack: Vec<Position> = self.board.neighbors(origin).collect();
        let mut opened = 0;

        while let Some(pos) = stack.pop() {
            let cell = self.board[pos];
            if cell.is_revealed() || cell.is_mine() {
                continue;
            }

            self.uncover(pos);
            self.spaces_remaining -= 1;
            opened += 1;

            if cell.value.is_open_space() {
                stack.extend(
                    self.board
                        .neighbors(pos)
                        .filter(|&p| !self.board[p].is_revealed()),
                );
            }
        }

        opened
    }

    fn check_bounds(&self, pos: Position) {
        assert!(
            self.board.is_within_bounds(pos),
            "{}",
            GameError::OutOfBounds(pos)
        );
    }
}
