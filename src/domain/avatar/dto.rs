use crate::domain::tts::dto::{default_speed, default_voice};
use serde::{Deserialize, Serialize};

/// Output resolution of the generated video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[serde(rename = "360p")]
    R360,
    #[default]
    #[serde(rename = "720p")]
    R720,
    #[serde(rename = "1080p")]
    R1080,
}

impl Resolution {
    /// Pixel height, the form the video provider expects on the wire.
    pub fn pixels(self) -> u16 {
        match self {
            Self::R360 => 360,
            Self::R720 => 720,
            Self::R1080 => 1080,
        }
    }
}

/// Request for POST /avatar/talk_from_tts: the TTS fields plus the
/// presenter portrait and the desired output resolution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkRequest {
    pub text: String,
    #[serde(default = "default_voice")]
    pub voice: String,
    #[serde(default = "default_speed")]
    pub speed: f32,
    pub image_url: String,
    #[serde(default)]
    pub resolution: Resolution,
}

/// Response for POST /avatar/talk_from_tts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TalkResponse {
    pub video_url: String,
    pub status: String,
    pub id: String,
}
