//! Theme constants for the checkers GUI

use egui::Color32;

// Board colors
pub const DARK_SQUARE: Color32 = Color32::from_rgb(45, 48, 54);
pub const LIGHT_SQUARE: Color32 = Color32::from_rgb(178, 64, 52);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(30, 32, 36);

// Piece colors
pub const RED_PIECE: Color32 = Color32::from_rgb(205, 55, 45);
pub const RED_PIECE_RIM: Color32 = Color32::from_rgb(140, 35, 28);
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_RIM: Color32 = Color32::from_rgb(90, 90, 100);
pub const KING_MARK: Color32 = Color32::from_rgb(235, 190, 60);

// Markers
pub const MOVE_MARKER: Color32 = Color32::from_rgb(70, 210, 90);
pub const SELECTION_RING: Color32 = Color32::from_rgb(250, 220, 90);

// Graph debug overlay
pub const GRAPH_VERTEX: Color32 = Color32::from_rgb(70, 210, 90);
pub const GRAPH_EDGE: Color32 = Color32::from_rgb(80, 130, 230);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const TURN_ACCENT: Color32 = Color32::from_rgb(80, 200, 120);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(250, 220, 90, 70)
}

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.38;
pub const MOVE_MARKER_RADIUS: f32 = 7.0;
pub const SELECTION_RING_WIDTH: f32 = 3.0;
