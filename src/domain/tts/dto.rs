use serde::{Deserialize, Serialize};

pub const DEFAULT_VOICE: &str = "ja-JP-Wavenet-A";
pub const DEFAULT_SPEED: f32 = 1.0;

/// Request for POST /tts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
}

/// Response for POST /tts
#[derive(Debug, Serialize, Deserialize)]
pub struct TtsResponse {
    pub url: String,
}

pub(crate) fn default_voice() -> String {
    DEFAULT_VOICE.to_string()
}

pub(crate) fn default_speed() -> f32 {
    DEFAULT_SPEED
}
