// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{analyze,reset,copy,export}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs

pub use copy::copy;
pub use export::export;

use crate::{ gui::app::App, table::TableData };

/// Run one analysis over the paste with the options currently on screen.
pub fn analyze(app: &mut App) {
    let opts = app.request_options();
    logd!("Analyze: Clicked (chars={}, opts={:?})", app.state.gui.paste.len(), opts);

    match crate::analyze::analyze(&app.state.gui.paste, &opts) {
        Ok(analysis) => {
            app.table = TableData::from_analysis(&analysis);
            let mut msg = format!(
                "{} player(s), {} games, {} points possible",
                analysis.rows.len(),
                analysis.week.max_confidence(),
                analysis.total_points_possible()
            );
            if !analysis.skipped.is_empty() {
                msg.push_str(&format!(", {} line(s) skipped", analysis.skipped.len()));
            }
            app.analysis = Some(analysis);
            app.status(msg);
        }
        Err(e) => {
            loge!("Analyze: {}", e);
            // A bad focus name should not wipe the table the user is looking at.
            if matches!(e, crate::error::AnalyzeError::UnknownFocusEntry(_)) {
                app.status(e.to_string());
                return;
            }
            app.analysis = None;
            app.table = TableData::empty();
            app.status(e.to_string());
        }
    }
}

/// Drop the last result and any manual focus teams.
pub fn reset(app: &mut App) {
    app.analysis = None;
    app.table = TableData::empty();
    app.manual_teams.clear();
    app.state.gui.focus_enabled = false;
    app.state.gui.focus_name.clear();
    app.status("Cleared");
    logd!("Reset: Cleared results");
}
