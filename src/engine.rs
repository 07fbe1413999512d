//! Computer move selection
//!
//! The opponent is a fixed heuristic, not a search. Rules are tried in
//! strict priority order and the first applicable one wins:
//!
//! 1. **Win now**: lowest-index empty cell that completes an own line
//! 2. **Block**: lowest-index empty cell where the opponent would complete
//!    a line on their next move
//! 3. **Center**: take the center cell if it is free
//! 4. **Random**: uniform choice among the remaining empty cells
//!
//! The random fallback draws from an injected [`StdRng`], so a fixed seed
//! makes move selection fully reproducible.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Cell, ComputerPlayer, MoveRule};
//!
//! let mut board = Board::new();
//! board.place(1, Cell::X);
//! board.place(2, Cell::X);
//!
//! let mut player = ComputerPlayer::with_seed(Cell::X, 42);
//! let choice = player.select_move(&board).unwrap();
//! assert_eq!(choice.cell, 3);
//! assert_eq!(choice.rule, MoveRule::WinNow);
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::{Board, Cell, CELL_COUNT, CENTER_CELL};
use crate::rules::check_for_victory;

/// Which selection rule produced a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRule {
    /// Completed an own line for an immediate win
    WinNow,
    /// Occupied the cell where the opponent would have won
    Block,
    /// Took the free center cell
    Center,
    /// Uniform random pick among empty cells
    Random,
}

/// A selected cell together with the rule that chose it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    pub cell: usize,
    pub rule: MoveRule,
}

/// Heuristic computer player
#[derive(Debug)]
pub struct ComputerPlayer {
    value: Cell,
    rng: StdRng,
}

impl ComputerPlayer {
    /// New player for `value` with an entropy-seeded RNG
    pub fn new(value: Cell) -> Self {
        Self {
            value,
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded construction for reproducible move selection
    pub fn with_seed(value: Cell, seed: u64) -> Self {
        Self {
            value,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The cell value this player places
    pub fn value(&self) -> Cell {
        self.value
    }

    /// Pick a cell on `board`, or `None` when no empty cell remains.
    pub fn select_move(&mut self, board: &Board) -> Option<MoveChoice> {
        if let Some(cell) = find_winning_move(board, self.value) {
            return Some(MoveChoice {
                cell,
                rule: MoveRule::WinNow,
            });
        }
        if let Some(cell) = find_winning_move(board, self.value.opponent()) {
            return Some(MoveChoice {
                cell,
                rule: MoveRule::Block,
            });
        }
        if board.is_empty(CENTER_CELL) {
            return Some(MoveChoice {
                cell: CENTER_CELL,
                rule: MoveRule::Center,
            });
        }
        let open = board.empty_cells();
        if open.is_empty() {
            return None;
        }
        let cell = open[self.rng.gen_range(0..open.len())];
        Some(MoveChoice {
            cell,
            rule: MoveRule::Random,
        })
    }
}

/// Lowest-index empty cell whose placement would complete a line for
/// `player`, probed on a stack copy of the board.
pub fn find_winning_move(board: &Board, player: Cell) -> Option<usize> {
    for cell in 1..=CELL_COUNT {
        if board.is_empty(cell) {
            let mut probe = *board;
            probe.place(cell, player);
            if check_for_victory(&probe, player).is_some() {
                return Some(cell);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, Cell)]) -> Board {
        let mut board = Board::new();
        for &(cell, value) in cells {
            board.place(cell, value);
        }
        board
    }

    #[test]
    fn test_win_beats_block() {
        // X can win at 3; O threatens to win at 6. X must take the win.
        let board = board_with(&[
            (1, Cell::X),
            (2, Cell::X),
            (4, Cell::O),
            (5, Cell::O),
        ]);
        let mut player = ComputerPlayer::with_seed(Cell::X, 0);
        let choice = player.select_move(&board).unwrap();
        assert_eq!(choice.cell, 3);
        assert_eq!(choice.rule, MoveRule::WinNow);
    }

    #[test]
    fn test_blocks_opponent_win() {
        let board = board_with(&[(4, Cell::O), (5, Cell::O), (1, Cell::X)]);
        let mut player = ComputerPlayer::with_seed(Cell::X, 0);
        let choice = player.select_move(&board).unwrap();
        assert_eq!(choice.cell, 6);
        assert_eq!(choice.rule, MoveRule::Block);
    }

    #[test]
    fn test_takes_center_when_free() {
        let board = board_with(&[(1, Cell::O)]);
        let mut player = ComputerPlayer::with_seed(Cell::X, 0);
        let choice = player.select_move(&board).unwrap();
        assert_eq!(choice.cell, CENTER_CELL);
        assert_eq!(choice.rule, MoveRule::Center);
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        // Center occupied, no win or block available anywhere.
        let board = board_with(&[(5, Cell::O)]);
        let mut player = ComputerPlayer::with_seed(Cell::X, 7);
        let choice = player.select_move(&board).unwrap();
        assert_eq!(choice.rule, MoveRule::Random);
        assert!(board.is_empty(choice.cell));
    }

    #[test]
    fn test_seeded_selection_is_reproducible() {
        let board = board_with(&[(5, Cell::O)]);
        let first = ComputerPlayer::with_seed(Cell::X, 99).select_move(&board);
        let second = ComputerPlayer::with_seed(Cell::X, 99).select_move(&board);
        assert_eq!(first, second);
    }

    #[test]
    fn test_lowest_index_win_preferred() {
        // Two winning cells: 3 (top row) and 7 (left column). 3 wins the scan.
        let board = board_with(&[
            (1, Cell::X),
            (2, Cell::X),
            (4, Cell::X),
            (5, Cell::O),
            (6, Cell::O),
        ]);
        let mut player = ComputerPlayer::with_seed(Cell::X, 0);
        let choice = player.select_move(&board).unwrap();
        assert_eq!(choice.cell, 3);
    }

    #[test]
    fn test_no_move_on_full_board() {
        let mut board = Board::new();
        for cell in 1..=CELL_COUNT {
            board.place(cell, if cell % 2 == 0 { Cell::O } else { Cell::X });
        }
        let mut player = ComputerPlayer::with_seed(Cell::X, 0);
        assert_eq!(player.select_move(&board), None);
    }
}
