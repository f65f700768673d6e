use crate::error::{AppError, AppResult};
use crate::infrastructure::providers::ChatProvider;
use async_trait::async_trait;
use std::sync::Arc;

pub struct ChatService {
    chat_provider: Arc<dyn ChatProvider>,
}

impl ChatService {
    pub fn new(chat_provider: Arc<dyn ChatProvider>) -> Self {
        Self { chat_provider }
    }
}

#[async_trait]
pub trait ChatServiceApi: Send + Sync {
    /// Generate a single assistant reply to a user message.
    async fn reply(&self, message: &str) -> AppResult<String>;
}

#[async_trait]
impl ChatServiceApi for ChatService {
    async fn reply(&self, message: &str) -> AppResult<String> {
        tracing::info!(message_length = message.len(), "Chat request");

        let reply = self
            .chat_provider
            .complete(message)
            .await
            .map_err(AppError::ExternalService)?;

        tracing::info!(reply_length = reply.len(), "Chat reply generated");

        Ok(reply)
    }
}
