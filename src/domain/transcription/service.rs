use crate::error::{AppError, AppResult};
use crate::infrastructure::providers::Transcriber;
use async_trait::async_trait;
use std::sync::Arc;

pub struct TranscriptionService {
    transcriber: Arc<dyn Transcriber>,
}

impl TranscriptionService {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }
}

#[async_trait]
pub trait TranscriptionServiceApi: Send + Sync {
    /// Transcribe an uploaded audio file to text.
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> AppResult<String>;
}

#[async_trait]
impl TranscriptionServiceApi for TranscriptionService {
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> AppResult<String> {
        tracing::info!(
            filename = filename,
            audio_size_bytes = audio.len(),
            "Transcription request"
        );

        let text = self
            .transcriber
            .transcribe(filename, audio)
            .await
            .map_err(AppError::ExternalService)?;

        tracing::info!(text_length = text.len(), "Transcription finished");

        Ok(text)
    }
}
