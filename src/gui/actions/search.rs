// src/gui/actions/search.rs
use crate::gui::{app::App, progress::GuiProgress};

pub fn search(app: &mut App) {
    if app.session.workbook().is_none() {
        app.status("Open a workbook first");
        return;
    }

    let mut prog = GuiProgress::new(app.status.clone(), "Searching");
    // Blank terms do nothing at all; the previous results stay up.
    if let Some(hits) = app.session.search(&app.search_text, &mut prog) {
        app.status(format!(
            "{} row(s) match {:?}; {} selected",
            hits,
            app.session.term(),
            app.session.selection().len()
        ));
    }
}
