pub mod dto;
pub mod service;

pub use dto::{TtsRequest, TtsResponse};
pub use service::{TtsService, TtsServiceApi};
