// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    /// Comparisons page -> show the current-pricing cards under the pivot
    pub comparisons_show_pricing: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            current_page_index: 0,
            comparisons_show_pricing: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn from_env() -> Self {
        Self { options: AppOptions::from_env(), gui: GuiState::default() }
    }
}
