use crate::game::{GameStatus, Player};

pub fn won(player: Player) -> String {
    format!("{player} won!")
}

pub const TIE: &str = "Tie Game!";
pub const GAME_OVER: &str = "Game is over! Press N to play again.";
pub const COLUMN_FULL: &str = "Column is full!";
pub const NEW_GAME: &str = "New game started!";

pub fn turn(player: Player) -> String {
    format!("{player} Turn")
}

/// Announcement for a status the game just entered, if it ended.
pub fn outcome(status: GameStatus) -> Option<String> {
    match status {
        GameStatus::InProgress => None,
        GameStatus::Won(player) => Some(won(player)),
        GameStatus::Tied => Some(TIE.to_string()),
    }
}
