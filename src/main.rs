//! Checkers GUI
//!
//! A graphical two-player checkers game with mandatory captures and
//! jump-chain enforcement.

use checkers::ui::CheckersApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([700.0, 560.0])
            .with_title("Checkers"),
        ..Default::default()
    };

    eframe::run_native(
        "Checkers",
        options,
        Box::new(|cc| Ok(Box::new(CheckersApp::new(cc)))),
    )
}
