//! Front-ends that drive a [`GameEngine`](crate::game::GameEngine): an
//! interactive ratatui view and a plain line-based loop. Both only observe
//! the statuses the engine returns.

mod app;
mod game_view;
pub mod messages;
pub mod plain;

pub use app::App;
