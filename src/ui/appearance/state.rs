use crate::config::Theme;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppearanceState {
    pub theme: Theme,
    /// Number of toggles this session, shown nowhere but handy in logs.
    pub toggles: u32,
}

impl UiState for AppearanceState {}

impl AppearanceState {
    pub fn new(theme: Theme) -> Self {
        Self { theme, toggles: 0 }
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
