use crate::chat::{ChatMessage, ChatRole, FAILURE_REPLY};
use crate::ui::chat::intent::ChatIntent;
use crate::ui::chat::state::ChatPanelState;
use crate::ui::mvi::Reducer;

pub struct ChatReducer;

impl Reducer for ChatReducer {
    type State = ChatPanelState;
    type Intent = ChatIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ChatIntent::Open => {
                state.open = true;
            }
            ChatIntent::Close => {
                state.open = false;
            }
            ChatIntent::Input(ch) => {
                state.input.push(ch);
            }
            ChatIntent::Backspace => {
                state.input.pop();
            }
            ChatIntent::Submit { timestamp_ms } => {
                if state.can_submit() {
                    let text = state.input.trim().to_string();
                    state.input.clear();
                    state.messages.push(ChatMessage {
                        role: ChatRole::User,
                        text,
                        timestamp_ms,
                    });
                    state.loading = true;
                }
            }
            ChatIntent::ReplyReceived { text, timestamp_ms } => {
                state.messages.push(ChatMessage {
                    role: ChatRole::Model,
                    text,
                    timestamp_ms,
                });
                state.loading = false;
            }
            ChatIntent::ReplyFailed { timestamp_ms } => {
                state.messages.push(ChatMessage {
                    role: ChatRole::Model,
                    text: FAILURE_REPLY.to_string(),
                    timestamp_ms,
                });
                state.loading = false;
            }
        }
        state
    }
}
