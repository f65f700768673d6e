use super::transcriber::Transcriber;
use async_openai::{
    config::OpenAIConfig,
    types::{AudioInput, CreateTranscriptionRequestArgs},
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;

/// OpenAI Whisper implementation of the transcriber.
pub struct OpenAiTranscriber {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
}

impl OpenAiTranscriber {
    pub fn new(client: Arc<Client<OpenAIConfig>>, model: String) -> Self {
        Self { client, model }
    }
}

#[async_trait]
impl Transcriber for OpenAiTranscriber {
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> Result<String, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            model = %self.model,
            filename = filename,
            audio_size_bytes = audio.len(),
            "Calling OpenAI transcription API"
        );

        let request = CreateTranscriptionRequestArgs::default()
            .file(AudioInput::from_vec_u8(filename.to_string(), audio))
            .model(&self.model)
            .build()
            .map_err(|e| format!("Failed to build transcription request: {}", e))?;

        let response = self
            .client
            .audio()
            .transcribe(request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    model = %self.model,
                    "OpenAI transcription API call failed"
                );
                format!("OpenAI transcription error: {}", e)
            })?;

        tracing::info!(
            model = %self.model,
            latency_ms = start_time.elapsed().as_millis(),
            text_length = response.text.len(),
            "Transcription finished"
        );

        Ok(response.text)
    }
}
