// src/gui/actions/load.rs
use std::path::{Path, PathBuf};

use eframe::egui::DroppedFile;

use crate::{
    gui::{app::App, progress::GuiProgress},
    load::load_workbook_from_bytes,
};

pub fn open_path(app: &mut App) {
    let text = app.open_path_text.trim().to_string();
    if text.is_empty() {
        app.status("Enter a workbook path, or drop a file on the window");
        return;
    }
    app.state.gui.last_open_path = text.clone();

    let mut prog = GuiProgress::new(app.status.clone(), "Reading");
    match app.session.load(Path::new(&text), &mut prog) {
        Ok(()) => loaded(app),
        Err(e) => app.status(format!("Could not open {text}: {e}")),
    }
}

/// Native drops carry a path; web/sandboxed drops only carry bytes.
pub fn open_dropped(app: &mut App, file: DroppedFile) {
    if let Some(path) = file.path {
        app.open_path_text = path.display().to_string();
        open_path(app);
        return;
    }

    let Some(bytes) = file.bytes else {
        loge!("Drop: {:?} has neither path nor bytes", file.name);
        app.status(format!("Could not read dropped file {}", file.name));
        return;
    };

    let name = PathBuf::from(&file.name);
    let ext = name.extension().and_then(|e| e.to_str()).unwrap_or("");
    let stem = name.file_stem().and_then(|e| e.to_str()).unwrap_or("Sheet1");
    logf!("Drop: {} ({} bytes)", file.name, bytes.len());

    let mut prog = GuiProgress::new(app.status.clone(), "Reading");
    match load_workbook_from_bytes(bytes.to_vec(), ext, stem, &mut prog) {
        Ok(wb) => {
            app.session.replace_workbook(wb, file.name.clone());
            app.open_path_text = file.name;
            loaded(app);
        }
        Err(e) => {
            loge!("Drop: decode failed {}: {}", file.name, e);
            app.status(format!("Could not open {}: {e}", file.name));
        }
    }
}

fn loaded(app: &mut App) {
    let Some(wb) = app.session.workbook() else { return };
    app.status(format!(
        "Loaded {}: {} sheet(s), {} row(s)",
        app.session.source(),
        wb.sheets.len(),
        wb.row_count()
    ));
}
