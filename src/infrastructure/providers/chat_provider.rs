use async_trait::async_trait;

/// Provider for chat completions.
/// Abstracts the underlying LLM vendor (OpenAI today).
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Generate a single assistant reply to a user message.
    ///
    /// # Errors
    /// Returns error if the provider call fails or the response carries no text
    async fn complete(&self, message: &str) -> Result<String, String>;
}
