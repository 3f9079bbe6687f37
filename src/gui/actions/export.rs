// src/gui/actions/export.rs
use crate::gui::app::App;

pub fn export(app: &mut App) {
    app.apply_out_path();

    let export = &app.state.options.export;
    logf!(
        "Export: Begin rows={} format={:?} path={}",
        app.session.selection().len(),
        export.format,
        export.out_path().display()
    );

    match app.session.export(export) {
        Ok(Some(path)) => {
            logf!("Export: OK {}", path.display());
            app.status(format!(
                "Exported {} row(s) to {}",
                app.session.selection().len(),
                path.display()
            ));
        }
        Ok(None) => app.status("Nothing selected; no file written"),
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
