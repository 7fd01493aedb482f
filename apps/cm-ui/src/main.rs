#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;

use app::CrystalMemApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 640.0])
            .with_title("crystalmem"),
        ..Default::default()
    };

    eframe::run_native(
        "crystalmem",
        options,
        Box::new(|cc| Ok(Box::new(CrystalMemApp::new(cc)))),
    )
}
