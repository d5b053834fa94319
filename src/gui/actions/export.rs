// src/gui/actions/export.rs
use crate::{ file, gui::app::App };

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!("Export: Out path set → {}", app.state.options.export.out_path().display());
        app.out_path_dirty = false;
    }
    app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();

    let status_msg = match app.analysis.as_ref() {
        None => {
            logd!("Export: Clicked, but there's nothing to export");
            s!("Nothing to export")
        }
        Some(analysis) => match file::write_export(&app.state.options.export, analysis) {
            Ok(path) => format!("Exported {} row(s) to {}", analysis.rows.len(), path.display()),
            Err(e) => {
                loge!("Export: {}", e);
                format!("Export failed: {e}")
            }
        },
    };

    app.status(status_msg);
}
