// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{config::state::AppState, session::Session};

use super::{actions, components};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Bulletin Scan",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,
    pub session: Session,

    // text fields; mapped onto options/session when acted on
    pub open_path_text: String,
    pub search_text: String,
    pub out_path_text: String,
    pub out_path_dirty: bool,

    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        let open_path_text = state.gui.last_open_path.clone();
        logf!("Init: out_path={}", out_path_text);

        Self {
            state,
            session: Session::new(),
            open_path_text,
            search_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Open a workbook to begin"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    #[inline]
    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Sync the output field into export options if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            logf!("UI: Out path set → {}", self.state.options.export.out_path().display());
            self.out_path_dirty = false;
        }
    }

    fn take_dropped_file(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        // One workbook at a time; extra files in the same drop are ignored.
        if let Some(file) = dropped.into_iter().next() {
            actions::open_dropped(self, file);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.take_dropped_file(ctx);

        egui::TopBottomPanel::top("open").show(ctx, |ui| {
            ui.add_space(4.0);
            components::open_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(format!("Status: {}", self.status_text()));
        });

        egui::SidePanel::right("selection")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                components::export_bar::draw(ui, self);
                ui.separator();
                components::selection_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::search_bar::draw(ui, self);
            ui.separator();
            components::results_table::draw(ui, self);
        });
    }
}
