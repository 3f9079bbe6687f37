// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use bulletin_scan::{
    config::state::GuiState,
    gui,
    log::{self, Sink},
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(Sink::FileOnly);

    let gui = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Bulletin Scan")
            .with_inner_size([gui.window_w as f32, gui.window_h as f32])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
