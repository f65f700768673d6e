use async_trait::async_trait;

/// Provider for speech-to-text transcription.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an uploaded audio file to text.
    ///
    /// The filename is forwarded to the provider, which sniffs the container
    /// format from its extension.
    ///
    /// # Errors
    /// Returns error if the provider call fails
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> Result<String, String>;
}
