use log::{debug, info};

use super::{rules, Board, Cell, Player, COLS};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Tied,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Why a drop left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredReason {
    GameOver,
    ColumnFull,
}

/// Where a piece landed and the state the game moved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub status: GameStatus,
    pub current_player: Player,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed(Placement),
    Ignored {
        reason: IgnoredReason,
        status: GameStatus,
        current_player: Player,
    },
}

impl DropOutcome {
    /// Status after the drop, whether or not a piece was placed
    pub fn status(&self) -> GameStatus {
        match self {
            DropOutcome::Placed(placement) => placement.status,
            DropOutcome::Ignored { status, .. } => *status,
        }
    }

    pub fn current_player(&self) -> Player {
        match self {
            DropOutcome::Placed(placement) => placement.current_player,
            DropOutcome::Ignored { current_player, .. } => *current_player,
        }
    }
}

/// One game of Connect Four: the board, whose turn it is, and whether the
/// game has ended. Mutated in place; `reset` starts a new round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Create a new game: empty board, Player 1 to move
    pub fn new() -> Self {
        GameEngine {
            board: Board::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Moves after the game has ended and moves into a full column are
    /// ignored rather than rejected. Only an out-of-range column is an error.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, GameError> {
        if column >= COLS {
            return Err(GameError::InvalidColumn { column });
        }

        if self.is_terminal() {
            debug!("ignoring drop in column {column}: game is over");
            return Ok(self.ignored(IgnoredReason::GameOver));
        }

        let Some(row) = self.board.find_drop_row(column) else {
            debug!("ignoring drop in column {column}: column is full");
            return Ok(self.ignored(IgnoredReason::ColumnFull));
        };

        let player = self.current_player;
        self.board.place(row, column, player.to_cell());
        debug!("{player} placed at ({row}, {column})");

        // Win is checked for the mover before the turn passes
        if rules::is_win(&self.board, player) {
            self.status = GameStatus::Won(player);
            info!("{player} won");
        } else if rules::is_tie(&self.board) {
            self.status = GameStatus::Tied;
            info!("game tied");
        } else {
            self.current_player = player.other();
        }

        Ok(DropOutcome::Placed(Placement {
            row,
            column,
            player,
            status: self.status,
            current_player: self.current_player,
        }))
    }

    /// Start a new round from any state
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::One;
        self.status = GameStatus::InProgress;
        info!("game reset");
    }

    fn ignored(&self, reason: IgnoredReason) -> DropOutcome {
        DropOutcome::Ignored {
            reason,
            status: self.status,
            current_player: self.current_player,
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
