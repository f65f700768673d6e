pub mod asset_publisher;
pub mod chat_provider;
pub mod cloudinary;
pub mod did;
pub mod google_token;
pub mod google_tts;
pub mod openai_chat;
pub mod openai_transcriber;
pub mod speech_synthesizer;
pub mod transcriber;
pub mod video_generator;

pub use asset_publisher::{audio_public_id, AssetPublisher, PublishedAsset};
pub use chat_provider::ChatProvider;
pub use cloudinary::CloudinaryPublisher;
pub use did::DidVideoGenerator;
pub use google_token::GoogleTokenProvider;
pub use google_tts::GoogleTtsSynthesizer;
pub use openai_chat::OpenAiChatProvider;
pub use openai_transcriber::OpenAiTranscriber;
pub use speech_synthesizer::{SpeechSynthesizer, SynthesizedAudio};
pub use transcriber::Transcriber;
pub use video_generator::{VideoGenError, VideoGenerator, VideoJob};
