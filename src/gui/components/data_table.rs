// src/gui/components/data_table.rs
//
// Draws the results table. Purely a view over `app.table`; the focus entry
// (if any) is highlighted.

use eframe::egui::{ self, Align, Color32, Layout, RichText, TextWrapMode };
use egui_extras::{ Column, TableBuilder };

use crate::{
    config::consts::NAME_COL,
    gui::app::App,
    table::TableData,
};

const FOCUS_COLOR: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let table = &app.table;
    if table.is_empty() {
        ui.label(RichText::new("No results. Paste the standings and press Analyze.").weak());
        return;
    }

    let headers = table.headers.clone().unwrap_or_else(TableData::default_headers);
    let cols = table.ncols();
    let focus_name = app
        .analysis
        .as_ref()
        .and_then(|a| a.focus.as_ref())
        .map(|f| f.name.as_str());

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .cell_layout(Layout::left_to_right(Align::Center));
    for ci in 0..cols {
        let col = if ci == NAME_COL {
            Column::initial(180.0).at_least(80.0).clip(true)
        } else {
            Column::initial(120.0).at_least(40.0).clip(true)
        };
        builder = builder.column(col);
    }

    builder
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                    ui.strong(h.as_str());
                });
            }
        })
        .body(|body| {
            body.rows(20.0, table.nrows(), |mut row| {
                let Some(cells) = table.rows.get(row.index()) else { return };
                let is_focus = focus_name.is_some_and(|f| cells.get(NAME_COL).is_some_and(|n| n == f));

                for (ci, cell) in cells.iter().enumerate() {
                    let numeric = table.is_numeric_col(ci);
                    row.col(|ui| {
                        let mut rt = RichText::new(cell.as_str());
                        if is_focus {
                            rt = rt.color(FOCUS_COLOR).strong();
                        }
                        if numeric {
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(rt);
                            });
                        } else {
                            ui.label(rt);
                        }
                    });
                }
            });
        });
}
