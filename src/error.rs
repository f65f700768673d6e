use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Speech synthesis failed: {0}")]
    Synthesis(String),

    #[error("Audio publish failed: {0}")]
    Publish(String),

    #[error("Video job submission failed: {0}")]
    Submission(String),

    #[error("Video provider rejected the submission: {0}")]
    SubmissionRejected(String),

    #[error("Unexpected provider response: {0}")]
    Protocol(String),

    #[error("Video status poll failed: {0}")]
    PollingTransport(String),

    #[error("Video job did not finish in time: {0}")]
    PollingTimeout(String),

    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response structure - the `detail` field is the wire contract
/// every endpoint uses for failures
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) | Self::SubmissionRejected(_) => StatusCode::BAD_REQUEST,
            Self::PollingTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Configuration(_)
            | Self::Synthesis(_)
            | Self::Publish(_)
            | Self::Submission(_)
            | Self::Protocol(_)
            | Self::PollingTransport(_)
            | Self::ExternalService(_)
            | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the user-visible error response. Only the upstream
    /// provider's message is surfaced, never internal traces.
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            detail: self.to_string(),
        }
    }
}

/// Implement IntoResponse for automatic conversion in handlers
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::error!(
            error = %self,
            status = %status.as_u16(),
            "Request failed"
        );

        (status, Json(self.to_response())).into_response()
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
