// src/gui/components/search_bar.rs
use eframe::egui;
use crate::{engine::accept_term, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let loaded = app.session.workbook().is_some();

    ui.horizontal(|ui| {
        ui.label("Search:");
        let resp = ui.add_enabled(
            loaded,
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text("name, case number, anything in the row")
                .desired_width(320.0),
        );
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let can_search = loaded && accept_term(&app.search_text).is_some();
        if ui.add_enabled(can_search, egui::Button::new("Search")).clicked() || (enter && can_search) {
            actions::search(app);
        }

        ui.separator();
        ui.checkbox(&mut app.state.gui.show_extra_cells, "Show extra cells");
    });

    if app.session.has_searched() {
        let n = app.session.results().len();
        ui.label(
            egui::RichText::new(format!("{} result(s) for {:?}", n, app.session.term())).strong(),
        );
    }
}
