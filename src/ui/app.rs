//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, TopBottomPanel};

use crate::game::{GameAction, GameController};

use super::board_view::BoardView;
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    controller: GameController,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            controller: GameController::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the title and status line
    fn render_status_bar(&self, ctx: &Context) {
        TopBottomPanel::top("status_bar")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("TIC-TAC-TOE")
                            .size(22.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(&self.controller.snapshot().hint_text)
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Render the score row and the play-again control
    fn render_score_panel(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("score_panel")
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                let snapshot = self.controller.snapshot().clone();

                ui.columns(3, |cols| {
                    Self::score_card(&mut cols[0], "PLAYER 'O'", snapshot.player_o_wins, O_MARK);
                    Self::score_card(&mut cols[1], "DRAWS", snapshot.draws, TEXT_SECONDARY);
                    Self::score_card(&mut cols[2], "PLAYER 'X'", snapshot.player_x_wins, X_MARK);
                });

                if snapshot.is_terminal() {
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        let button = egui::Button::new(
                            RichText::new("Play Again").size(15.0).strong().color(TEXT_PRIMARY),
                        )
                        .fill(BUTTON_BG)
                        .corner_radius(CornerRadius::same(6));

                        if ui.add(button).clicked() {
                            self.controller.apply(GameAction::PlayAgain);
                        }
                    });
                }
            });
    }

    /// Render a single score column
    fn score_card(ui: &mut egui::Ui, label: &str, count: u32, accent: egui::Color32) {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(label).size(10.0).color(TEXT_MUTED));
                    ui.label(
                        RichText::new(format!("{count}"))
                            .size(20.0)
                            .strong()
                            .color(accent),
                    );
                });
            });
    }

    /// Render the board and forward taps
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(8.0))
            .show(ctx, |ui| {
                let snapshot = self.controller.snapshot().clone();
                if let Some(cell) = self.board_view.show(ui, &snapshot) {
                    self.controller.apply(GameAction::CellTapped(cell));
                }
            });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.render_status_bar(ctx);
        self.render_score_panel(ctx);
        self.render_board(ctx);
    }
}
