//! Game rules: win and draw detection

pub mod win;

pub use win::{check_for_victory, VictoryType, WINNING_LINES};

use crate::board::{Board, Cell};

/// Check if the game is a draw: every cell occupied, no line complete
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
        && check_for_victory(board, Cell::O).is_none()
        && check_for_victory(board, Cell::X).is_none()
}
