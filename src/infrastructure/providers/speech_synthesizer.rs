use async_trait::async_trait;

/// Audio produced by a synthesis call. Single fixed codec for now.
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

impl SynthesizedAudio {
    pub fn mp3(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            content_type: "audio/mpeg",
        }
    }
}

/// Provider for TTS synthesis.
/// Abstracts the underlying TTS vendor (Google Cloud TTS today).
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to speech.
    ///
    /// Returns MP3 audio ready for playback or upload.
    ///
    /// # Arguments
    /// * `text` - The text to synthesize (non-empty, validated upstream)
    /// * `voice` - Provider voice name, e.g. "ja-JP-Wavenet-A"
    /// * `speed` - Speaking rate multiplier, > 0
    ///
    /// # Errors
    /// Returns error if synthesis fails or the provider is unavailable
    async fn synthesize(
        &self,
        text: &str,
        voice: &str,
        speed: f32,
    ) -> Result<SynthesizedAudio, String>;
}
