//! Win detection for the 3x3 board
//!
//! The eight winning lines are evaluated in a fixed precedence order: rows
//! top to bottom, then columns left to right, then the top-left diagonal,
//! then the top-right diagonal. The first complete line is the one reported,
//! which keeps the victory classification deterministic.

use crate::board::{Board, Cell};

/// Winning cell triples (1..=9 indices) in precedence order
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9], // rows
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9], // columns
    [1, 5, 9],
    [3, 5, 7], // diagonals
];

/// Which winning line fired, used by presentation for highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VictoryType {
    #[default]
    None,
    Horizontal1,
    Horizontal2,
    Horizontal3,
    Vertical1,
    Vertical2,
    Vertical3,
    Diagonal1,
    Diagonal2,
}

/// Victory classification for each entry of [`WINNING_LINES`], same order
const LINE_TYPES: [VictoryType; 8] = [
    VictoryType::Horizontal1,
    VictoryType::Horizontal2,
    VictoryType::Horizontal3,
    VictoryType::Vertical1,
    VictoryType::Vertical2,
    VictoryType::Vertical3,
    VictoryType::Diagonal1,
    VictoryType::Diagonal2,
];

impl VictoryType {
    /// The three cell indices of the fired line, `None` when no line fired
    pub fn cells(self) -> Option<[usize; 3]> {
        LINE_TYPES
            .iter()
            .position(|&t| t == self)
            .map(|i| WINNING_LINES[i])
    }
}

/// Check whether `player` holds a complete line.
///
/// Returns the classification of the first matching line in precedence
/// order, or `None` when no line is complete for that player.
pub fn check_for_victory(board: &Board, player: Cell) -> Option<VictoryType> {
    if player == Cell::Empty {
        return None;
    }
    WINNING_LINES
        .iter()
        .position(|line| line.iter().all(|&cell| board.get(cell) == player))
        .map(|i| LINE_TYPES[i])
}
