// src/gui/components/focus_panel.rs
//
// "My entry" controls. Changing anything here re-runs the analysis so the
// table always reflects the visible settings.

use eframe::egui::{ self, RichText };

use crate::{
    focus::FocusMethod,
    gui::{ actions, app::App },
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.analysis.is_none() {
        return;
    }

    let mut changed = false;
    let names = app.player_names();

    ui.horizontal(|ui| {
        changed |= ui.checkbox(&mut app.state.gui.focus_enabled, "My entry:").changed();

        let gui = &mut app.state.gui;
        let shown = if gui.focus_name.is_empty() { "(none)" } else { gui.focus_name.as_str() };
        let before = gui.focus_name.clone();
        egui::ComboBox::from_id_salt("focus_name")
            .selected_text(s!(shown))
            .show_ui(ui, |ui| {
                for n in &names {
                    ui.selectable_value(&mut gui.focus_name, n.clone(), n.as_str());
                }
            });
        if gui.focus_name != before {
            logf!("UI: focus entry → {}", gui.focus_name);
            changed |= gui.focus_enabled;
        }
    });

    if !app.state.gui.focus_enabled {
        if changed {
            actions::analyze(app);
        }
        return;
    }

    let teams = app.pick_teams();
    let detected = app
        .analysis
        .as_ref()
        .map(|a| a.pregame.teams.clone())
        .unwrap_or_default();

    ui.horizontal_wrapped(|ui| {
        ui.label("Remaining teams:");
        for t in &teams {
            let mut on = app.manual_teams.contains(t);
            let label = if detected.contains(t) { RichText::new(t.as_str()).strong() } else { RichText::new(t.as_str()) };
            if ui.checkbox(&mut on, label).changed() {
                if on { app.manual_teams.insert(t.clone()); } else { app.manual_teams.remove(t); }
                changed = true;
            }
        }
        if !app.manual_teams.is_empty() && ui.small_button("Use detected").clicked() {
            app.manual_teams.clear();
            changed = true;
        }
    });

    if let Some(outcome) = app.analysis.as_ref().and_then(|a| a.focus.as_ref()) {
        let how = match outcome.method {
            FocusMethod::RemainingTeams => format!("picks on {} remaining team(s)", outcome.teams.len()),
            FocusMethod::CountDifference => format!(
                "pick count {} vs usual {} (extra {})",
                outcome.own_picks,
                outcome.base_picks,
                outcome.own_picks.saturating_sub(outcome.base_picks)
            ),
        };
        ui.weak(format!("{}: {} remaining from {}", outcome.name, outcome.remaining_points, how));
    }

    if changed {
        actions::analyze(app);
    }
}
