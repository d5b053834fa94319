// src/gui/components/input_panel.rs
//
// Left panel: paste area and the knobs of one Analyze request.

use eframe::egui;

use crate::{
    config::{
        consts::MAX_CONFIDENCE_LIMIT,
        options::{ Layout, SortOrder },
    },
    gui::{ actions, app::App },
};

const LAYOUTS: [Layout; 3] = [Layout::Auto, Layout::Inline, Layout::Standings];
const SORTS: [SortOrder; 2] = [SortOrder::Input, SortOrder::Ceiling];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Standings paste");
    ui.label("Copy the visible text of the Weekly Standings page, or one player per line: Alice 1 2 - (3) - (4)");

    let paste_h = (ui.available_height() - 190.0).max(120.0);
    egui::ScrollArea::vertical()
        .id_salt("paste_scroll")
        .max_height(paste_h)
        .show(ui, |ui| {
            ui.add(
                egui::TextEdit::multiline(&mut app.state.gui.paste)
                    .desired_rows(24)
                    .desired_width(f32::INFINITY)
                    .font(egui::TextStyle::Monospace)
                    .hint_text("Paste the standings text here…"),
            );
        });

    ui.separator();

    ui.horizontal(|ui| {
        ui.label("Max confidence:");
        ui.add(egui::DragValue::new(&mut app.state.gui.max_override).range(0..=MAX_CONFIDENCE_LIMIT));
        ui.weak("0 = auto-detect");
    });

    let analyze = &mut app.state.options.analyze;
    ui.horizontal(|ui| {
        ui.label("Layout:");
        egui::ComboBox::from_id_salt("layout")
            .selected_text(analyze.layout.label())
            .show_ui(ui, |ui| {
                for l in LAYOUTS {
                    ui.selectable_value(&mut analyze.layout, l, l.label());
                }
            });
    });

    ui.horizontal(|ui| {
        ui.label("Order:");
        egui::ComboBox::from_id_salt("sort")
            .selected_text(analyze.sort.label())
            .show_ui(ui, |ui| {
                for s in SORTS {
                    ui.selectable_value(&mut analyze.sort, s, s.label());
                }
            });
    });

    ui.checkbox(&mut analyze.count_unmarked, "Count confidences never listed as remaining");

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        if ui.add(egui::Button::new(egui::RichText::new("Analyze").strong())).clicked() {
            actions::analyze(app);
        }
        if ui.button("Clear").clicked() {
            app.state.gui.paste.clear();
            actions::reset(app);
            logd!("UI: paste cleared");
        }
    });
}
