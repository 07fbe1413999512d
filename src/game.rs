//! Turn controller: consumes intents, owns the board and the published
//! snapshot
//!
//! The controller is the only component that mutates the board. Every
//! accepted intent runs to completion synchronously and ends with a fresh
//! [`GameSnapshot`] being published; presentation reads the snapshot and
//! carries no game logic of its own.
//!
//! The human plays `O`, the computer plays `X`. When a human move leaves the
//! game live with the turn passed to the computer, the controller runs the
//! computer reply before returning, under a re-entrancy guard that drops any
//! input arriving mid-move.

use std::ops::{Deref, DerefMut};

use thiserror::Error;
use tracing::{debug, info};

use crate::board::{Board, Cell, CELL_COUNT};
use crate::engine::ComputerPlayer;
use crate::rules::{check_for_victory, VictoryType};

/// The value placed by human taps
pub const HUMAN: Cell = Cell::O;
/// The value placed by the move selector
pub const COMPUTER: Cell = Cell::X;

/// Inbound intents from the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// A board cell (1..=9) was tapped
    CellTapped(usize),
    /// The play-again control was clicked
    PlayAgain,
}

/// Why an intent was not applied.
///
/// User-visible behavior is a silent no-op in every case; the typed reason
/// exists for logging and tests.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    #[error("cell {cell} is outside 1..=9")]
    OutOfRange { cell: usize },

    #[error("cell {cell} is already occupied")]
    Occupied { cell: usize },

    #[error("computer move in progress")]
    ComputerThinking,

    #[error("game is already over")]
    GameOver,

    #[error("game is still in progress")]
    InProgress,
}

/// Immutable outward game state, replaced wholesale on every accepted intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Full board contents, ordered by cell index
    pub board: [Cell; CELL_COUNT],
    /// Who moves first in the current game; alternates on each reset
    pub starting_player: Cell,
    /// Whose move is next; `Empty` once the game has been won
    pub current_turn: Cell,
    /// Human-readable status line
    pub hint_text: String,
    /// Which line fired, for highlighting
    pub victory_type: VictoryType,
    /// True once a win has been detected
    pub has_won: bool,
    /// Cumulative session tallies
    pub player_o_wins: u32,
    pub player_x_wins: u32,
    pub draws: u32,
}

impl GameSnapshot {
    fn initial(starting_player: Cell) -> Self {
        Self {
            board: [Cell::Empty; CELL_COUNT],
            starting_player,
            current_turn: starting_player,
            hint_text: turn_hint(starting_player),
            victory_type: VictoryType::None,
            has_won: false,
            player_o_wins: 0,
            player_x_wins: 0,
            draws: 0,
        }
    }

    /// True once the current game can no longer accept moves
    pub fn is_terminal(&self) -> bool {
        self.has_won || !self.board.contains(&Cell::Empty)
    }
}

fn turn_hint(player: Cell) -> String {
    format!("Player '{}' turn", player.to_char())
}

fn win_hint(player: Cell) -> String {
    format!("Player '{}' Won", player.to_char())
}

/// Owns the board, the score counters and the computer player, and turns
/// intents into snapshot updates.
pub struct GameController {
    board: Board,
    snapshot: GameSnapshot,
    version: u64,
    computer: ComputerPlayer,
    computer_thinking: bool,
}

impl GameController {
    /// New session: the human starts the first game
    pub fn new() -> Self {
        Self::with_computer(ComputerPlayer::new(COMPUTER))
    }

    /// New session with a seeded move selector, for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self::with_computer(ComputerPlayer::with_seed(COMPUTER, seed))
    }

    fn with_computer(computer: ComputerPlayer) -> Self {
        Self {
            board: Board::new(),
            snapshot: GameSnapshot::initial(HUMAN),
            version: 0,
            computer,
            computer_thinking: false,
        }
    }

    /// The latest published snapshot
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Monotonic snapshot version, bumped once per accepted intent.
    /// Presentation can diff against it to skip redundant work.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Apply an intent, swallowing rejections into silent no-ops
    pub fn apply(&mut self, action: GameAction) {
        let result = match action {
            GameAction::CellTapped(cell) => self.tap_cell(cell),
            GameAction::PlayAgain => self.play_again(),
        };
        if let Err(rejection) = result {
            debug!(?action, %rejection, "intent rejected");
        }
    }

    /// Apply a human tap on `cell` (1..=9).
    ///
    /// On success the human value is placed and evaluated; if the game is
    /// still live and the turn passed to the computer, the computer reply
    /// runs synchronously before this returns.
    pub fn tap_cell(&mut self, cell: usize) -> Result<(), Rejection> {
        if self.computer_thinking {
            return Err(Rejection::ComputerThinking);
        }
        if !Board::in_range(cell) {
            return Err(Rejection::OutOfRange { cell });
        }
        if self.snapshot.current_turn == Cell::Empty {
            return Err(Rejection::GameOver);
        }
        if !self.board.is_empty(cell) {
            return Err(Rejection::Occupied { cell });
        }

        let mover = self.snapshot.current_turn;
        self.board.place(cell, mover);
        self.evaluate_after(mover);

        if !self.snapshot.has_won && self.snapshot.current_turn == COMPUTER {
            self.run_computer_move();
        }

        self.publish();
        Ok(())
    }

    /// Start a fresh game. Only takes effect once the previous game is
    /// terminal; the starting player always flips regardless of who won
    /// (intentional fairness policy).
    pub fn play_again(&mut self) -> Result<(), Rejection> {
        if self.computer_thinking {
            return Err(Rejection::ComputerThinking);
        }
        if !(self.snapshot.has_won || self.board.is_full()) {
            return Err(Rejection::InProgress);
        }

        self.board.reset();
        let starter = self.snapshot.starting_player.opponent();
        self.snapshot.starting_player = starter;
        self.snapshot.current_turn = starter;
        self.snapshot.hint_text = turn_hint(starter);
        self.snapshot.victory_type = VictoryType::None;
        self.snapshot.has_won = false;
        info!(starter = %starter.to_char(), "new game");

        if starter == COMPUTER {
            self.run_computer_move();
        }

        self.publish();
        Ok(())
    }

    /// Shared post-move evaluation, after every placed value
    fn evaluate_after(&mut self, mover: Cell) {
        if let Some(victory) = check_for_victory(&self.board, mover) {
            self.snapshot.victory_type = victory;
            self.snapshot.has_won = true;
            self.snapshot.current_turn = Cell::Empty;
            self.snapshot.hint_text = win_hint(mover);
            match mover {
                Cell::O => self.snapshot.player_o_wins += 1,
                Cell::X => self.snapshot.player_x_wins += 1,
                Cell::Empty => {}
            }
            info!(winner = %mover.to_char(), line = ?victory, "game won");
        } else if self.board.is_full() {
            self.snapshot.hint_text = "Game Draw".to_string();
            self.snapshot.draws += 1;
            info!("game drawn");
        } else {
            let next = mover.opponent();
            self.snapshot.current_turn = next;
            self.snapshot.hint_text = turn_hint(next);
        }
    }

    /// Run the computer move under the re-entrancy guard
    fn run_computer_move(&mut self) {
        let mut scope = ThinkingScope::enter(self);
        scope.computer_move();
    }

    fn computer_move(&mut self) {
        if let Some(choice) = self.computer.select_move(&self.board) {
            debug!(cell = choice.cell, rule = ?choice.rule, "computer move");
            self.board.place(choice.cell, COMPUTER);
            self.evaluate_after(COMPUTER);
        }
    }

    fn publish(&mut self) {
        self.snapshot.board = self.board.cells();
        self.version += 1;
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped re-entrancy guard around the computer move.
///
/// The flag is released on every exit path, including unwinding, so a
/// failure mid-move can never leave the controller stuck rejecting input.
struct ThinkingScope<'a> {
    controller: &'a mut GameController,
}

impl<'a> ThinkingScope<'a> {
    fn enter(controller: &'a mut GameController) -> Self {
        controller.computer_thinking = true;
        Self { controller }
    }
}

impl Drop for ThinkingScope<'_> {
    fn drop(&mut self) {
        self.controller.computer_thinking = false;
    }
}

impl Deref for ThinkingScope<'_> {
    type Target = GameController;

    fn deref(&self) -> &Self::Target {
        self.controller
    }
}

impl DerefMut for ThinkingScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.controller
    }
}
