// src/gui/components/selection_panel.rs
use eframe::egui::{self, RichText};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let n = app.session.selection().len();

    ui.horizontal(|ui| {
        ui.heading(format!("Selected ({n})"));
        if ui.add_enabled(n > 0, egui::Button::new("Clear")).clicked() {
            app.session.clear_selection();
            logf!("UI: Selection cleared ({} row(s))", n);
            app.status("Selection cleared");
        }
    });

    if n == 0 {
        ui.label(RichText::new("Tick rows in the results to collect them here.").weak());
        return;
    }

    // Ledger order = the order rows were picked in; that's the export order too.
    let mut unpick = None;
    egui::ScrollArea::vertical()
        .id_salt("selection_list")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for row in app.session.selection().rows() {
                ui.horizontal(|ui| {
                    if ui.small_button("✕").on_hover_text("Remove").clicked() {
                        unpick = Some(row.clone());
                    }
                    let case = row.cell(0).map(|c| c.to_text().into_owned()).unwrap_or_default();
                    ui.label(RichText::new(case).monospace());
                    ui.label(RichText::new(format!("{} · {}", row.sheet, row.row_number)).weak());
                });
                if !row.org_context.is_empty() {
                    ui.add(egui::Label::new(RichText::new(&row.org_context).small()).truncate());
                }
                ui.add_space(2.0);
            }
        });

    if let Some(row) = unpick {
        app.session.toggle(&row);
        logd!("UI: Removed {} from selection", row.key());
    }
}
