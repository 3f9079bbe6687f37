// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Last workbook path typed or dropped into the window
    pub last_open_path: String,

    /// Results table -> show the "More" column (cells beyond the fixed four)
    pub show_extra_cells: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200,
            window_h: 760,
            last_open_path: s!(),
            show_extra_cells: true,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
