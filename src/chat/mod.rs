//! Chat widget backend.
//!
//! Response generation is disabled for this deployment: [`StubChatService`]
//! waits briefly and answers with a fixed notice.

use std::future::Future;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// First message shown when the chat panel opens.
pub const GREETING: &str = "Hi! I'm Dr. Researcher's AI Digital Twin. Ask me anything about my research, papers, or background.";

/// Reply of the stub service.
pub const DISABLED_REPLY: &str =
    "AI chat capabilities are currently disabled for this static deployment.";

/// Shown in place of a reply when generation fails.
pub const FAILURE_REPLY: &str = "I'm having trouble connecting to my thought process right now.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    /// Unix time in milliseconds.
    pub timestamp_ms: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error("chat service unavailable: {0}")]
    Unavailable(String),
}

/// Generates the model's answer to `message` given the prior `history`.
pub trait ChatService: Send + Sync + 'static {
    fn generate(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> impl Future<Output = Result<String, ChatError>> + Send;
}

/// Placeholder service that never contacts a model.
#[derive(Debug, Clone)]
pub struct StubChatService {
    delay: Duration,
}

impl StubChatService {
    pub fn new() -> Self {
        Self {
            delay: Duration::from_millis(500),
        }
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubChatService {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatService for StubChatService {
    async fn generate(&self, message: &str, history: &[ChatMessage]) -> Result<String, ChatError> {
        tracing::debug!(
            chars = message.chars().count(),
            history = history.len(),
            "chat request answered by stub"
        );
        tokio::time::sleep(self.delay).await;
        Ok(DISABLED_REPLY.to_string())
    }
}
