use crate::config::Theme;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppearanceIntent {
    /// Switch between light and dark.
    Toggle,
    /// Force a theme (startup, `--theme`).
    Set(Theme),
}

impl Intent for AppearanceIntent {}
