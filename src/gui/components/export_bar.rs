// src/gui/components/export_bar.rs
//
// Format picker, output path and the Export / Copy buttons.

use eframe::egui::{ self, TextStyle };

use crate::{
    config::options::ExportFormat,
    gui::{ actions, app::App },
};

const FORMATS: [(ExportFormat, &str); 3] = [
    (ExportFormat::Csv, "CSV"),
    (ExportFormat::Tsv, "TSV"),
    (ExportFormat::Json, "JSON"),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let before = app.state.options.export.format;
    let mut picked = before;

    ui.horizontal(|ui| {
        ui.label("Export as");
        for (fmt, label) in FORMATS {
            ui.radio_value(&mut picked, fmt, label);
        }

        // JSON always carries field names
        let headers = &mut app.state.options.export.include_headers;
        let toggled = ui
            .add_enabled(picked.delimiter().is_some(), egui::Checkbox::new(headers, "Header row"))
            .changed();
        if toggled {
            logf!("UI: include_headers = {}", headers);
        }
    });

    if picked != before {
        app.state.options.export.set_format(picked);
        logf!("UI: export format {:?} -> {:?}", before, picked);
        // a path the user typed keeps its own extension
        if !app.out_path_dirty {
            app.out_path_text = app.state.options.export.out_path().to_string_lossy().into_owned();
        }
    }

    let can_export = !app.table.is_empty();
    let ctx = ui.ctx().clone();
    ui.horizontal(|ui| {
        ui.label("File:");
        let edit = egui::TextEdit::singleline(&mut app.out_path_text)
            .font(TextStyle::Monospace)
            .desired_width(320.0);
        if ui.add(edit).changed() {
            app.out_path_dirty = true;
            logd!("UI: output path edited: {}", app.out_path_text);
        }

        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }
        if ui
            .add_enabled(can_export, egui::Button::new("Copy"))
            .on_hover_text("Copy in the selected format")
            .clicked()
        {
            actions::copy(app, &ctx);
        }
    });
}
