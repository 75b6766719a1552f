//! Board rendering for the checkers GUI

use crate::board::{Board, BoardGraphs, Piece, Side, Square, NUM_RANKS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 80.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked playable square, if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        turn: Side,
        selected: Option<Square>,
        destinations: &[Square],
        graph_overlay: Option<&BoardGraphs>,
        game_over: bool,
    ) -> Option<Square> {
        let available_size = ui.available_size();

        // Fit the 8x8 board into the available space
        let board_size = available_size.x.min(available_size.y) - 2.0 * BOARD_MARGIN;
        self.cell_size = board_size / NUM_RANKS as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_stroke(
            self.board_rect,
            CornerRadius::same(2),
            Stroke::new(2.0, BOARD_BORDER),
            egui::StrokeKind::Outside,
        );

        self.draw_squares(&painter);
        self.draw_pieces(&painter, board);

        if let Some(square) = selected {
            self.draw_selection_ring(&painter, square);
        }
        for &square in destinations {
            self.draw_move_marker(&painter, square);
        }

        if let Some(graphs) = graph_overlay {
            self.draw_graph_overlay(&painter, graphs);
        }

        // Hover feedback and click handling
        let mut clicked = None;
        if !game_over {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(square) = self.screen_to_board(pointer_pos) {
                    let selectable =
                        matches!(board.get(square), Some(p) if p.side == turn);
                    if selectable || destinations.contains(&square) {
                        self.draw_hover(&painter, square);
                    }
                    if response.clicked() {
                        clicked = Some(square);
                    }
                }
            }
        }

        clicked
    }

    /// Draw the checkerboard cells; playable squares are the dark ones
    fn draw_squares(&self, painter: &Painter) {
        for rank in 0..NUM_RANKS {
            for file in 0..NUM_RANKS {
                let color = if rank % 2 == file % 2 {
                    DARK_SQUARE
                } else {
                    LIGHT_SQUARE
                };
                painter.rect_filled(self.cell_rect(rank, file), CornerRadius::ZERO, color);
            }
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for (square, piece) in board.pieces() {
            self.draw_piece(painter, square, piece);
        }
    }

    /// Draw a single piece disc with rim and optional king mark
    fn draw_piece(&self, painter: &Painter, square: Square, piece: Piece) {
        let center = self.board_to_screen(square);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        let (fill, rim) = match piece.side {
            Side::Red => (RED_PIECE, RED_PIECE_RIM),
            Side::Black => (BLACK_PIECE, BLACK_PIECE_RIM),
        };

        // Shadow
        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );
        painter.circle_filled(center, radius, fill);
        painter.circle_stroke(center, radius * 0.92, Stroke::new(radius * 0.1, rim));
        painter.circle_stroke(center, radius * 0.6, Stroke::new(radius * 0.06, rim));

        // Kings get a gold crown ring
        if piece.king {
            painter.circle_stroke(center, radius * 0.35, Stroke::new(radius * 0.14, KING_MARK));
            painter.circle_filled(center, radius * 0.12, KING_MARK);
        }
    }

    fn draw_selection_ring(&self, painter: &Painter, square: Square) {
        let center = self.board_to_screen(square);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 4.0;
        painter.circle_stroke(
            center,
            radius,
            Stroke::new(SELECTION_RING_WIDTH, SELECTION_RING),
        );
    }

    fn draw_move_marker(&self, painter: &Painter, square: Square) {
        let center = self.board_to_screen(square);
        painter.circle_filled(center, MOVE_MARKER_RADIUS, MOVE_MARKER);
    }

    fn draw_hover(&self, painter: &Painter, square: Square) {
        let rect = self.cell_rect(square.rank(), square.file());
        painter.rect_filled(rect, CornerRadius::ZERO, hover_valid());
    }

    /// Debug overlay: adjacency vertices and the king-graph edges
    fn draw_graph_overlay(&self, painter: &Painter, graphs: &BoardGraphs) {
        let stroke = Stroke::new(1.0, GRAPH_EDGE);
        for from in Square::all() {
            let start = self.board_to_screen(from);
            for &to in graphs.king.neighbors(from) {
                painter.line_segment([start, self.board_to_screen(to)], stroke);
            }
        }
        for square in Square::all() {
            painter.circle_filled(self.board_to_screen(square), 4.0, GRAPH_VERTEX);
        }
    }

    fn cell_rect(&self, rank: u8, file: u8) -> Rect {
        let min = self.board_rect.min
            + Vec2::new(file as f32 * self.cell_size, rank as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to a playable square
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Square> {
        let relative = screen_pos - self.board_rect.min;
        let file = (relative.x / self.cell_size).floor() as i32;
        let rank = (relative.y / self.cell_size).floor() as i32;
        Square::from_grid(rank, file)
    }

    /// Convert a square to the screen coordinate of its cell center
    pub fn board_to_screen(&self, square: Square) -> Pos2 {
        let x = self.board_rect.min.x + (square.file() as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + (square.rank() as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
