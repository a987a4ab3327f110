use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatIntent {
    Open,
    Close,
    Input(char),
    Backspace,
    /// Enter pressed. Ignored when the input is blank or a reply is pending.
    Submit { timestamp_ms: i64 },
    ReplyReceived { text: String, timestamp_ms: i64 },
    ReplyFailed { timestamp_ms: i64 },
}

impl Intent for ChatIntent {}
