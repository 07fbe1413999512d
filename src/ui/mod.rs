//! GUI module for the Tic-Tac-Toe game
//!
//! Presentation only: renders the latest game snapshot and forwards taps
//! and the play-again click to the controller. No game logic lives here.

mod app;
mod board_view;
mod theme;

pub use app::TicTacToeApp;
