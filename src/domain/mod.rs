pub mod avatar;
pub mod chat;
pub mod transcription;
pub mod tts;
