//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::theme::*;
use crate::board::Side;
use crate::game::Game;

/// Main checkers application
pub struct CheckersApp {
    game: Game,
    board_view: BoardView,
    show_graph: bool,
}

impl Default for CheckersApp {
    fn default() -> Self {
        Self {
            game: Game::new(),
            board_view: BoardView::default(),
            show_graph: false,
        }
    }
}

impl CheckersApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Discard the running session and start a fresh one
    fn restart(&mut self) {
        self.game = Game::new();
    }

    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                });
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_graph, "Graph Overlay (G)");
                });
            });
        });
    }

    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(200.0)
            .max_width(240.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);
                ui.add_space(10.0);
                self.render_pieces_card(ui);
                ui.add_space(10.0);
                self.render_actions_card(ui);

                if let Some(winner) = self.game.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn side_label(side: Side) -> (&'static str, egui::Color32) {
        match side {
            Side::Red => ("RED", RED_PIECE),
            Side::Black => ("BLACK", BLACK_PIECE_RIM),
        }
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●").size(20.0).color(RED_PIECE));
            ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let (name, accent) = Self::side_label(self.game.turn());
            ui.horizontal(|ui| {
                ui.label(RichText::new("●").size(24.0).color(accent));
                ui.add_space(6.0);
                ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
            });

            let status = if self.game.winner().is_some() {
                ("Game over", WIN_HIGHLIGHT)
            } else if self.game.chain_active() {
                ("Must continue the jump", TURN_ACCENT)
            } else if self.game.selected().is_some() {
                ("Pick a destination", TURN_ACCENT)
            } else {
                ("Pick a piece", TEXT_SECONDARY)
            };
            ui.label(RichText::new(status.0).size(12.0).color(status.1));
        });
    }

    fn render_pieces_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("PIECES").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for side in [Side::Red, Side::Black] {
                let (name, accent) = Self::side_label(side);
                ui.horizontal(|ui| {
                    ui.label(RichText::new("●").size(16.0).color(accent));
                    ui.label(RichText::new(name).size(12.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(format!("{}/12", self.game.board().count(side)))
                                .size(14.0)
                                .color(TEXT_PRIMARY),
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);
            if ui.button(RichText::new("New Game").size(12.0)).clicked() {
                self.restart();
            }
            ui.add_space(4.0);
            ui.label(
                RichText::new("N/R: new game  G: graph")
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Side) {
        let (name, accent) = Self::side_label(winner);
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 50.0);
                        ui.label(RichText::new("●").size(28.0).color(accent));
                        ui.add_space(6.0);
                        ui.vertical(|ui| {
                            ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));
                            ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                        });
                    });
                    ui.add_space(12.0);
                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.restart();
                    }
                });
            });
    }

    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let graph_overlay = self.show_graph.then(|| self.game.graphs());
            let clicked = self.board_view.show(
                ui,
                self.game.board(),
                self.game.turn(),
                self.game.selected(),
                self.game.destinations(),
                graph_overlay,
                self.game.winner().is_some(),
            );

            if let Some(square) = clicked {
                self.game.click(square);
            }
        });
    }

    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // N or R - new game
            if i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::R) {
                self.restart();
            }
            // G - toggle graph overlay
            if i.key_pressed(egui::Key::G) {
                self.show_graph = !self.show_graph;
            }
        });
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
