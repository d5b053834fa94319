// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Raw paste, kept across Analyze clicks so the user can tweak and re-run
    pub paste: String,

    /// Max confidence override; 0 = auto-detect
    pub max_override: u32,

    pub window_w: u32,
    pub window_h: u32,

    /// Focus ("my entry") controls
    pub focus_enabled: bool,
    pub focus_name: String,

    pub show_breakdown: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            paste: s!(),
            max_override: 0,
            window_w: 1100,
            window_h: 700,
            focus_enabled: false,
            focus_name: s!(),
            show_breakdown: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        let gui = GuiState {
            max_override: options.analyze.max_override(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
