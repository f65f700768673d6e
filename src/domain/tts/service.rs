use crate::error::{AppError, AppResult};
use crate::infrastructure::providers::{audio_public_id, AssetPublisher, SpeechSynthesizer};
use async_trait::async_trait;
use std::sync::Arc;

pub struct TtsService {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    publisher: Arc<dyn AssetPublisher>,
}

impl TtsService {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, publisher: Arc<dyn AssetPublisher>) -> Self {
        Self {
            synthesizer,
            publisher,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Synthesize text to speech and publish the audio to a public URL.
    ///
    /// The publish id is derived from the text, so repeated requests for the
    /// same text overwrite the same remote object.
    async fn synthesize_to_url(&self, text: &str, voice: &str, speed: f32) -> AppResult<String>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize_to_url(&self, text: &str, voice: &str, speed: f32) -> AppResult<String> {
        tracing::info!(
            voice = voice,
            speed = speed,
            text_length = text.len(),
            "TTS synthesis request"
        );

        let audio = self
            .synthesizer
            .synthesize(text, voice, speed)
            .await
            .map_err(AppError::Synthesis)?;

        let public_id = audio_public_id(text);
        let asset = self
            .publisher
            .publish(audio.bytes, &public_id)
            .await
            .map_err(AppError::Publish)?;

        tracing::info!(
            public_id = %asset.public_id,
            url = %asset.url,
            "Synthesized audio published"
        );

        Ok(asset.url)
    }
}
