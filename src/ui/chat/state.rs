use crate::chat::{ChatMessage, ChatRole, GREETING};
use crate::ui::mvi::UiState;

/// Chat panel. Messages survive closing and reopening the panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatPanelState {
    pub open: bool,
    pub messages: Vec<ChatMessage>,
    pub input: String,
    /// A reply is being generated.
    pub loading: bool,
}

impl UiState for ChatPanelState {}

impl ChatPanelState {
    /// Closed panel seeded with the greeting.
    pub fn with_greeting(timestamp_ms: i64) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Model,
                text: GREETING.to_string(),
                timestamp_ms,
            }],
            ..Self::default()
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.loading && !self.input.trim().is_empty()
    }
}
