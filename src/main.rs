#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe::egui;
use plantbuddy::gui::PlantBuddyApp;

fn main() -> eframe::Result {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("House Plant Buddy")
            .with_inner_size([1240.0, 840.0])
            .with_min_inner_size([980.0, 640.0]),
        ..Default::default()
    };

    eframe::run_native(
        "plantbuddy",
        native_options,
        Box::new(|cc| Ok(Box::new(PlantBuddyApp::new(cc)))),
    )
}
