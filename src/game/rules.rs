//! Terminal-condition predicates over a [`Board`].
//!
//! Win detection rescans the whole board from every cell rather than
//! tracking lines incrementally from the last move, so the result depends
//! only on the board contents and the player being evaluated.

use super::{Board, Player, COLS, ROWS};

/// Pieces in a row needed to win
pub const LINE_LENGTH: usize = 4;

/// (row step, column step) for horizontal, vertical, diagonal down-right
/// and diagonal down-left runs.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// True if `player` owns four contiguous cells in any direction.
pub fn is_win(board: &Board, player: Player) -> bool {
    (0..ROWS).any(|row| {
        (0..COLS).any(|col| {
            DIRECTIONS
                .iter()
                .any(|&(d_row, d_col)| run_matches(board, player, row, col, d_row, d_col))
        })
    })
}

/// True if no cell is empty. Only meaningful after `is_win` returned false
/// for the player who just moved.
pub fn is_tie(board: &Board) -> bool {
    board.is_full()
}

fn run_matches(
    board: &Board,
    player: Player,
    row: usize,
    col: usize,
    d_row: isize,
    d_col: isize,
) -> bool {
    let target = player.to_cell();
    (0..LINE_LENGTH as isize).all(|step| {
        let r = row as isize + d_row * step;
        let c = col as isize + d_col * step;
        in_bounds(r, c) && board.get(r as usize, c as usize) == target
    })
}

fn in_bounds(row: isize, col: isize) -> bool {
    (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    fn board_with(pieces: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in pieces {
            board.place(row, col, player.to_cell());
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_win() {
        let board = Board::new();
        assert!(!is_win(&board, Player::One));
        assert!(!is_win(&board, Player::Two));
    }

    #[test]
    fn test_vertical_win_column_zero() {
        let board = board_with(&[
            (5, 0, Player::One),
            (4, 0, Player::One),
            (3, 0, Player::One),
            (2, 0, Player::One),
        ]);
        assert!(is_win(&board, Player::One));
        assert!(!is_win(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win_right_edge() {
        let board = board_with(&[
            (5, 3, Player::Two),
            (5, 4, Player::Two),
            (5, 5, Player::Two),
            (5, 6, Player::Two),
        ]);
        assert!(is_win(&board, Player::Two));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_with(&[
            (2, 0, Player::One),
            (3, 1, Player::One),
            (4, 2, Player::One),
            (5, 3, Player::One),
        ]);
        assert!(is_win(&board, Player::One));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = board_with(&[
            (0, 6, Player::Two),
            (1, 5, Player::Two),
            (2, 4, Player::Two),
            (3, 3, Player::Two),
        ]);
        assert!(is_win(&board, Player::Two));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
        ]);
        assert!(!is_win(&board, Player::One));
    }

    #[test]
    fn test_broken_line_is_not_a_win() {
        let board = board_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::Two),
            (5, 3, Player::One),
            (5, 4, Player::One),
        ]);
        assert!(!is_win(&board, Player::One));
    }

    #[test]
    fn test_runs_do_not_wrap_across_rows() {
        // Row-major neighbours (5,5) (5,6) (4,0) (4,1) are not contiguous
        let board = board_with(&[
            (5, 5, Player::One),
            (5, 6, Player::One),
            (4, 0, Player::One),
            (4, 1, Player::One),
        ]);
        assert!(!is_win(&board, Player::One));
    }

    #[test]
    fn test_mirrored_diagonal_keeps_outcome() {
        let pieces = [
            (5, 1, Player::One),
            (4, 2, Player::One),
            (3, 3, Player::One),
            (2, 4, Player::One),
        ];
        let mirrored: Vec<_> = pieces
            .iter()
            .map(|&(row, col, player)| (row, COLS - 1 - col, player))
            .collect();

        assert!(is_win(&board_with(&pieces), Player::One));
        assert!(is_win(&board_with(&mirrored), Player::One));
    }

    #[test]
    fn test_is_tie_requires_full_board() {
        let mut board = Board::new();
        assert!(!is_tie(&board));

        for row in 0..ROWS {
            for col in 0..COLS {
                board.place(row, col, Cell::Player1);
            }
        }
        assert!(is_tie(&board));
    }
}
