pub mod service;

pub use service::{ChatService, ChatServiceApi};

use serde::{Deserialize, Serialize};

/// Request for POST /chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// Response for POST /chat
#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
}
