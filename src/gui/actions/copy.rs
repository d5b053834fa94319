// src/gui/actions/copy.rs
use eframe::egui;
use crate::{ gui::app::App, file };

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    let Some(analysis) = app.analysis.as_ref() else {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    };

    let export = &app.state.options.export;
    match file::to_export_string(export, analysis) {
        Ok(txt) => {
            logf!("Copy: format={:?}, rows={}, headers={}", export.format, analysis.rows.len(), export.include_headers);
            ui_ctx.copy_text(txt);
            app.status("Copied to clipboard");
        }
        Err(e) => {
            loge!("Copy: {}", e);
            app.status(format!("Copy failed: {e}"));
        }
    }
}
