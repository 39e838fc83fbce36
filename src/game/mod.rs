//! Core Connect Four game logic: board storage, players, win/tie rules and
//! the turn-management state machine.

mod board;
mod engine;
mod player;
pub mod rules;

pub use board::{Board, Cell, COLS, ROWS};
pub use engine::{DropOutcome, GameEngine, GameStatus, IgnoredReason, Placement};
pub use player::Player;
