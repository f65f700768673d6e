pub mod service;

pub use service::{TranscriptionService, TranscriptionServiceApi};

use serde::{Deserialize, Serialize};

/// Response for POST /listen
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub text: String,
}
