// src/gui/actions/copy.rs
use eframe::egui;
use crate::{csv::to_export_string, gui::app::App};

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.session.selection().is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but nothing is selected");
        return;
    }

    let export = &app.state.options.export;
    let table = app.session.report(export);
    let txt = to_export_string(&table, export.include_headers, export.delimiter());
    logf!("Copy: rows={} headers={}", table.row_count(), export.include_headers);

    ui_ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", table.row_count()));
}
