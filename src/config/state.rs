// src/config/state.rs
use super::consts::GUI_MISSING;
use super::options::ExtractOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Source path as typed in the text field
    pub source_text: String,

    /// Table highlighted in the left panel (last clicked)
    pub selected_table: Option<usize>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source_text: s!(),
            selected_table: None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: ExtractOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            options: ExtractOptions {
                missing: s!(GUI_MISSING),
                ..ExtractOptions::default()
            },
            gui: GuiState::default(),
        }
    }
}
