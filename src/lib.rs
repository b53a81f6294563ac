//! Game engine for Minesweeper: mine placement, flood-fill reveals, flags and
//! win/loss tracking. No rendering, input or persistence lives here.

pub mod board;
pub mod cell;
pub mod config;
pub mod error;
pub mod game;
pub mod position;

pub use board::{Board, ANCHOR_RADIUS};
pub use cell::{Cell, CellValue, Visibility};
pub use config::{BoardConfig, Difficulty, SAFE_OPENING};
pub use error::GameError;
pub use game::{Action, ActionOutcome, Game, GameState, RevealOutcome};
pub use position::Position;
