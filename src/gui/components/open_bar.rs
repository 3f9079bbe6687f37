// src/gui/components/open_bar.rs
use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Workbook:");
        let field_w = (ui.available_width() - 90.0).max(120.0);
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.open_path_text)
                .hint_text("path to .xlsx / .xls / .ods / .csv")
                .desired_width(field_w)
                .font(egui::TextStyle::Monospace),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Open").clicked() || enter {
            actions::open_path(app);
        }
    });

    let hovering = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
    let hint = if hovering {
        egui::RichText::new("Drop to open").strong()
    } else {
        match app.session.workbook() {
            Some(wb) => egui::RichText::new(format!(
                "{}: {} sheet(s), {} row(s)",
                app.session.source(),
                wb.sheets.len(),
                wb.row_count()
            )).weak(),
            None => egui::RichText::new("No workbook loaded. You can also drop a file here.").weak(),
        }
    };
    ui.label(hint);
}
