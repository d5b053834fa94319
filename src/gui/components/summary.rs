// src/gui/components/summary.rs
//
// Week figures, skipped lines, warnings and the per-player breakdown.

use eframe::egui::{ self, Color32, RichText };

use crate::{ analyze::MaxSource, core::sanitize::fmt_points, gui::app::App, specs::scoreboard::Pregame };

fn join_values(values: impl IntoIterator<Item = u32>) -> String {
    let parts: Vec<String> = values.into_iter().map(|v| v.to_string()).collect();
    if parts.is_empty() { s!("–") } else { parts.join(", ") }
}

/// Scoreboard lines that revealed games not yet started, then the teams found.
fn pregame_lines(p: &Pregame) -> Vec<String> {
    let mut out: Vec<String> = p.headers.iter().map(|h| format!("header: {}", h)).collect();
    if !p.teams.is_empty() {
        let teams: Vec<&str> = p.teams.iter().map(|t| t.as_str()).collect();
        out.push(format!("teams: {}", teams.join(", ")));
    }
    out
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(a) = app.analysis.as_ref() else {
        ui.label(RichText::new("No data yet.").weak());
        return;
    };

    ui.horizontal_wrapped(|ui| {
        let source = match a.max_source {
            MaxSource::Auto => "auto",
            MaxSource::Override => "override",
        };
        ui.label(format!("Week size (max confidence): {} ({})", a.week.max_confidence(), source));
        ui.separator();
        ui.label(format!("Total points possible: {}", a.total_points_possible()));
        ui.separator();
        ui.label(format!("Layout: {}", a.layout.label()));
        ui.separator();
        ui.label(format!("Players: {}", a.rows.len()));
    });

    if !a.skipped.is_empty() {
        ui.collapsing(format!("Skipped lines ({})", a.skipped.len()), |ui| {
            for s in &a.skipped {
                ui.label(format!("line {}: {} ({})", s.line_no, s.text, s.reason.describe()));
            }
        });
    }

    if !a.warnings.is_empty() {
        ui.collapsing(format!("Warnings ({})", a.warnings.len()), |ui| {
            for w in &a.warnings {
                ui.colored_label(Color32::from_rgb(0xF0, 0xD2, 0x3C), w.as_str());
            }
        });
    }

    let pregame = pregame_lines(&a.pregame);
    if !pregame.is_empty() {
        ui.collapsing(format!("Games not started ({} team(s))", a.pregame.teams.len()), |ui| {
            for line in &pregame {
                ui.monospace(line.as_str());
            }
        });
    }

    ui.checkbox(&mut app.state.gui.show_breakdown, "Per-player breakdown");
    if app.state.gui.show_breakdown {
        egui::ScrollArea::vertical()
            .id_salt("breakdown_scroll")
            .max_height(160.0)
            .show(ui, |ui| {
                for r in &a.rows {
                    let picks: Vec<String> = r.picks.iter().map(|p| p.display()).collect();
                    ui.label(format!(
                        "{}: used [{}] | open [{}] | unmarked [{}] | remaining {} | ceiling {}",
                        r.name,
                        join_values(r.used_slots.iter().copied()),
                        join_values(r.unused_slots.iter().copied()),
                        join_values(r.unmarked_slots.iter().copied()),
                        r.remaining_points,
                        fmt_points(r.ceiling),
                    ));
                    if !picks.is_empty() {
                        ui.weak(format!("    picks: {}", picks.join("  ")));
                    }
                }
            });
    }
}
