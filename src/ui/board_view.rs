//! Board rendering for the Tic-Tac-Toe GUI

use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Cell, CELL_COUNT};
use crate::game::GameSnapshot;

use super::theme::*;

/// Board view handles rendering and input for the 3x3 grid
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 96.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the tapped cell index, if any.
    ///
    /// Taps are only reported for empty cells while the game is live; the
    /// controller still re-validates every tap.
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &GameSnapshot) -> Option<usize> {
        let available = ui.available_size();
        let board_size = available.x.min(available.y);
        let inner = board_size - 2.0 * BOARD_MARGIN - 2.0 * CELL_GAP;
        self.cell_size = inner / 3.0;

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(10), BOARD_BG);

        let locked = snapshot.is_terminal();
        let hover_cell = if locked {
            None
        } else {
            response.hover_pos().and_then(|pos| self.screen_to_cell(pos))
        };

        for cell in 1..=CELL_COUNT {
            let rect = self.cell_rect(cell);
            let value = snapshot.board[cell - 1];
            let hovered = hover_cell == Some(cell) && value == Cell::Empty;

            let fill = if hovered { CELL_HOVER } else { CELL_BG };
            painter.rect_filled(rect, CornerRadius::same(6), fill);

            match value {
                Cell::O => self.draw_o(&painter, rect),
                Cell::X => self.draw_x(&painter, rect),
                Cell::Empty => {}
            }
        }

        if let Some(line) = snapshot.victory_type.cells() {
            self.draw_winning_line(&painter, line);
        }

        if !locked && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                if let Some(cell) = self.screen_to_cell(pos) {
                    if snapshot.board[cell - 1] == Cell::Empty {
                        return Some(cell);
                    }
                }
            }
        }

        None
    }

    /// Screen rectangle of a cell (1..=9, row-major)
    fn cell_rect(&self, cell: usize) -> Rect {
        let idx = cell - 1;
        let (row, col) = (idx / 3, idx % 3);
        let step = self.cell_size + CELL_GAP;
        let min = self.board_rect.min
            + Vec2::new(
                BOARD_MARGIN + col as f32 * step,
                BOARD_MARGIN + row as f32 * step,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Map a screen position to a cell index
    fn screen_to_cell(&self, pos: Pos2) -> Option<usize> {
        (1..=CELL_COUNT).find(|&cell| self.cell_rect(cell).contains(pos))
    }

    fn draw_o(&self, painter: &Painter, rect: Rect) {
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, O_MARK);
        painter.circle_stroke(rect.center(), self.cell_size * MARK_RADIUS_RATIO, stroke);
    }

    fn draw_x(&self, painter: &Painter, rect: Rect) {
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, X_MARK);
        let inset = self.cell_size * 0.22;
        let inner = rect.shrink(inset);
        painter.line_segment([inner.left_top(), inner.right_bottom()], stroke);
        painter.line_segment([inner.right_top(), inner.left_bottom()], stroke);
    }

    /// Strike through the three cells of the fired line
    fn draw_winning_line(&self, painter: &Painter, line: [usize; 3]) {
        let stroke = Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }
}
