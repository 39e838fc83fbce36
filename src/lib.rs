//! # Connect Four
//!
//! Game engine for two-player Connect Four with a terminal front-end built
//! on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win/tie rules, state machine
//! - [`ui`] — Terminal UI and plain line-based front-end
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
