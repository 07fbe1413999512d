//! Theme constants for the Tic-Tac-Toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const CELL_BG: Color32 = Color32::from_rgb(45, 48, 54);
pub const CELL_HOVER: Color32 = Color32::from_rgb(58, 62, 70);

// Mark colors
pub const O_MARK: Color32 = Color32::from_rgb(80, 200, 120);
pub const X_MARK: Color32 = Color32::from_rgb(235, 110, 100);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(255, 205, 80);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Button colors
pub const BUTTON_BG: Color32 = Color32::from_rgb(60, 100, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 16.0;
pub const CELL_GAP: f32 = 8.0;
pub const MARK_STROKE_RATIO: f32 = 0.09;
pub const MARK_RADIUS_RATIO: f32 = 0.30;
pub const WIN_STROKE_WIDTH: f32 = 6.0;
