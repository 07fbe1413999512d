//! Tic-Tac-Toe with a heuristic computer opponent
//!
//! A single-screen game: the human plays `O`, the computer plays `X` using a
//! fixed three-tier heuristic (win now, block, take the center) with a
//! seedable random fallback. Scores accumulate across games for the life of
//! the session, and the starting player alternates on every reset.
//!
//! # Architecture
//!
//! - [`board`]: fixed 9-cell board representation
//! - [`rules`]: win and draw detection over the eight fixed lines
//! - [`engine`]: heuristic computer move selection
//! - [`game`]: turn controller that consumes intents and publishes
//!   immutable [`GameSnapshot`]s
//! - [`ui`]: egui presentation that renders the snapshot and forwards taps
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{Cell, GameAction, GameController};
//!
//! let mut game = GameController::with_seed(42);
//!
//! // Human takes the center; the computer replies before this returns.
//! game.apply(GameAction::CellTapped(5));
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.board[4], Cell::O);
//! let occupied = snapshot.board.iter().filter(|&&c| c != Cell::Empty).count();
//! assert_eq!(occupied, 2);
//! ```

pub mod board;
pub mod engine;
pub mod game;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, CELL_COUNT, CENTER_CELL};
pub use engine::{ComputerPlayer, MoveChoice, MoveRule};
pub use game::{GameAction, GameController, GameSnapshot, Rejection, COMPUTER, HUMAN};
pub use rules::{check_for_victory, VictoryType, WINNING_LINES};
