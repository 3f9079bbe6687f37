// src/gui/components/results_table.rs
//
// The current result set, one checkbox per row. Checked state always comes
// from the selection ledger, so a row picked in an earlier search shows up
// checked again when a later search finds it.

use std::borrow::Cow;

use eframe::egui::{self, Align, Layout, RichText};
use egui_extras::{Column, TableBuilder};

use crate::{data::EnrichedRow, gui::app::App};

const CELL_HEADERS: [&str; 4] = ["Case ID", "Party 1", "Party 2", "Status"];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.session.workbook().is_none() {
        return;
    }
    if !app.session.has_searched() {
        ui.label(RichText::new("Type a term and press Enter to search every sheet.").weak());
        return;
    }
    if app.session.results().is_empty() {
        ui.label(format!("No rows contain {:?}.", app.session.term()));
        return;
    }

    let show_extra = app.state.gui.show_extra_cells;
    let mut all_checked = app.session.all_visible_selected();
    let mut select_all = false;
    let mut toggled: Option<usize> = None;

    {
        let session = &app.session;
        let results = session.results();

        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .min_scrolled_height(0.0)
            .cell_layout(Layout::left_to_right(Align::Center))
            .column(Column::exact(22.0))
            .column(Column::initial(220.0).clip(true))
            .column(Column::initial(170.0).clip(true));
        for _ in CELL_HEADERS {
            table = table.column(Column::initial(130.0).clip(true));
        }
        if show_extra {
            table = table.column(Column::initial(180.0).clip(true));
        }
        table = table.column(Column::auto()).column(Column::remainder());

        table
            .header(22.0, |mut header| {
                header.col(|ui| {
                    if ui
                        .checkbox(&mut all_checked, "")
                        .on_hover_text("Select all visible")
                        .changed()
                    {
                        select_all = true;
                    }
                });
                header.col(|ui| { ui.strong("Court"); });
                header.col(|ui| { ui.strong("State"); });
                for h in CELL_HEADERS {
                    header.col(|ui| { ui.strong(h); });
                }
                if show_extra {
                    header.col(|ui| { ui.strong("More"); });
                }
                header.col(|ui| { ui.strong("Sheet"); });
                header.col(|ui| { ui.strong("Row"); });
            })
            .body(|body| {
                body.rows(20.0, results.len(), |mut row| {
                    let ix = row.index();
                    let r = &results[ix];
                    let mut checked = session.is_selected(r);
                    row.set_selected(checked);

                    row.col(|ui| {
                        if ui.checkbox(&mut checked, "").changed() {
                            toggled = Some(ix);
                        }
                    });
                    row.col(|ui| { truncated(ui, &r.org_context); });
                    row.col(|ui| { truncated(ui, &r.state_context); });
                    for c in 0..CELL_HEADERS.len() {
                        row.col(|ui| { truncated(ui, &cell_text(r, c)); });
                    }
                    if show_extra {
                        row.col(|ui| { truncated(ui, &r.extra_cells()); });
                    }
                    row.col(|ui| { ui.label(&r.sheet); });
                    row.col(|ui| { ui.label(r.row_number.to_string()); });
                });
            });
    }

    if select_all {
        app.session.select_all_visible();
        logf!("UI: Select all visible → selected={}", app.session.selection().len());
    }
    if let Some(ix) = toggled {
        if let Some(on) = app.session.toggle_result(ix) {
            logd!("UI: Toggle result {} → {}", ix, on);
        }
    }
}

fn cell_text(r: &EnrichedRow, ix: usize) -> Cow<'_, str> {
    r.cell(ix).map(|c| c.to_text()).unwrap_or(Cow::Borrowed(""))
}

fn truncated(ui: &mut egui::Ui, text: &str) {
    if text.is_empty() {
        return;
    }
    ui.add(egui::Label::new(text).truncate()).on_hover_text(text);
}
