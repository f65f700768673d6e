pub mod avatar;
pub mod chat;
pub mod listen;
pub mod ping;
pub mod tts;
