// src/gui/app.rs
use std::{ collections::BTreeSet, error::Error };

use eframe::egui;

use crate::{
    analyze::Analysis,
    config::{
        options::{ AnalyzeOptions, FocusOptions },
        state::AppState,
    },
    table::TableData,
};

use super::components::{ data_table, export_bar, focus_panel, input_panel, summary };

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Pick 'Em Paste Analyzer",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth for options + widgets
    pub state: AppState,

    // result of the last Analyze click; None until then or after an error
    pub analysis: Option<Analysis>,
    pub table: TableData,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // focus panel: teams ticked by hand; empty = detected pre-game teams
    pub manual_teams: BTreeSet<String>,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();
        logf!("Init: options={:?}", state.options.analyze);

        Self {
            state,
            analysis: None,
            table: TableData::empty(),
            out_path_text,
            out_path_dirty: false,
            manual_teams: BTreeSet::new(),
            status: s!("Paste the standings text and press Analyze"),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Options for one Analyze request, built from the current widgets.
    pub fn request_options(&self) -> AnalyzeOptions {
        let gui = &self.state.gui;
        let mut opts = self.state.options.analyze.clone();
        opts.set_max_override(gui.max_override);
        opts.focus = if gui.focus_enabled && !gui.focus_name.trim().is_empty() {
            Some(FocusOptions {
                name: gui.focus_name.clone(),
                remaining_teams: self.manual_teams.clone(),
            })
        } else {
            None
        };
        opts
    }

    /// Every team code appearing in any pick of the last analysis.
    pub fn pick_teams(&self) -> BTreeSet<String> {
        self.analysis
            .iter()
            .flat_map(|a| a.rows.iter())
            .flat_map(|r| r.picks.iter())
            .filter_map(|p| p.team.clone())
            .collect()
    }

    pub fn player_names(&self) -> Vec<String> {
        self.analysis
            .as_ref()
            .map(|a| a.rows.iter().map(|r| r.name.clone()).collect())
            .unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.status.as_str());
        });

        egui::SidePanel::left("input")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                input_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            summary::draw(ui, self);

            focus_panel::draw(ui, self);

            ui.separator();

            export_bar::draw(ui, self);

            ui.separator();

            data_table::draw(ui, self);
        });
    }
}
