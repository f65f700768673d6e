use super::chat_provider::ChatProvider;
use async_openai::{
    config::OpenAIConfig,
    types::{ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI implementation of the chat provider.
pub struct OpenAiChatProvider {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiChatProvider {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(&self, message: &str) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            message_length = message.len(),
            "Calling OpenAI chat API"
        );

        let user_message = ChatCompletionRequestUserMessageArgs::default()
            .content(message)
            .build()
            .map_err(|e| format!("Failed to build chat message: {}", e))?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages([user_message.into()])
            .build()
            .map_err(|e| format!("Failed to build chat request: {}", e))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                model = %self.model,
                "OpenAI chat API call failed"
            );
            format!("OpenAI chat error: {}", e)
        })?;

        let reply = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| "OpenAI chat response carried no content".to_string())?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            reply_length = reply.len(),
            "Chat completion finished"
        );

        Ok(reply)
    }
}
