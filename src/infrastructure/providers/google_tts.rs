use super::google_token::GoogleTokenProvider;
use super::speech_synthesizer::{SpeechSynthesizer, SynthesizedAudio};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const GOOGLE_TTS_SYNTHESIZE_URL: &str = "https://texttospeech.googleapis.com/v1/text:synthesize";

#[derive(Debug, Serialize)]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfig,
}

#[derive(Debug, Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct VoiceSelection<'a> {
    #[serde(rename = "languageCode")]
    language_code: String,
    name: &'a str,
}

#[derive(Debug, Serialize)]
struct AudioConfig {
    #[serde(rename = "audioEncoding")]
    audio_encoding: &'static str,
    #[serde(rename = "speakingRate")]
    speaking_rate: f32,
}

#[derive(Debug, Deserialize)]
struct SynthesizeResponse {
    #[serde(rename = "audioContent")]
    audio_content: String,
}

/// Google Cloud Text-to-Speech implementation of the speech synthesizer.
pub struct GoogleTtsSynthesizer {
    token_provider: Arc<GoogleTokenProvider>,
    http_client: reqwest::Client,
}

impl GoogleTtsSynthesizer {
    pub fn new(token_provider: Arc<GoogleTokenProvider>) -> Self {
        Self {
            token_provider,
            http_client: reqwest::Client::new(),
        }
    }

    fn build_request<'a>(text: &'a str, voice: &'a str, speed: f32) -> SynthesizeRequest<'a> {
        SynthesizeRequest {
            input: SynthesisInput { text },
            voice: VoiceSelection {
                language_code: language_code(voice),
                name: voice,
            },
            audio_config: AudioConfig {
                audio_encoding: "MP3",
                speaking_rate: speed,
            },
        }
    }
}

/// Derive the BCP-47 language code from a Google voice name.
/// Voice names lead with the locale, e.g. "ja-JP-Wavenet-A" speaks ja-JP.
fn language_code(voice: &str) -> String {
    voice.splitn(3, '-').take(2).collect::<Vec<_>>().join("-")
}

#[async_trait]
impl SpeechSynthesizer for GoogleTtsSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        speed: f32,
    ) -> Result<SynthesizedAudio, String> {
        let start_time = std::time::Instant::now();

        tracing::info!(
            voice = voice,
            speaking_rate = speed,
            text_length = text.len(),
            "Calling Google TTS API"
        );

        let token = self.token_provider.access_token().await?;
        let body = Self::build_request(text, voice, speed);

        let response = self
            .http_client
            .post(GOOGLE_TTS_SYNTHESIZE_URL)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Google TTS request failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                voice = voice,
                "Google TTS API call failed"
            );
            return Err(format!("Google TTS returned {}: {}", status, error_text));
        }

        let synthesized: SynthesizeResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Google TTS response: {}", e))?;

        let audio_bytes = BASE64
            .decode(synthesized.audio_content.as_bytes())
            .map_err(|e| format!("Google TTS audio content is not valid base64: {}", e))?;

        tracing::info!(
            provider = "google",
            voice = voice,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            audio_size_bytes = audio_bytes.len(),
            "TTS synthesis completed"
        );

        Ok(SynthesizedAudio::mp3(audio_bytes))
    }
}
