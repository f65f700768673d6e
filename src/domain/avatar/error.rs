use crate::error::AppError;
use thiserror::Error;

/// Failures of the talk-from-text pipeline, one kind per stage outcome.
///
/// The pipeline never retries across stages, so each error names the stage
/// that aborted the request and carries only the provider's message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("video generation is not configured: {0}")]
    Configuration(String),

    #[error("{0}")]
    Synthesis(String),

    #[error("{0}")]
    Publish(String),

    #[error("{0}")]
    Submission(String),

    #[error("{0}")]
    SubmissionRejected(String),

    #[error("{0}")]
    Protocol(String),

    #[error("{0}")]
    PollingTransport(String),

    #[error("{0}")]
    PollingTimeout(String),

    #[error("request was cancelled")]
    Cancelled,
}

impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Configuration(msg) => AppError::Configuration(msg),
            PipelineError::Synthesis(msg) => AppError::Synthesis(msg),
            PipelineError::Publish(msg) => AppError::Publish(msg),
            PipelineError::Submission(msg) => AppError::Submission(msg),
            PipelineError::SubmissionRejected(msg) => AppError::SubmissionRejected(msg),
            PipelineError::Protocol(msg) => AppError::Protocol(msg),
            PipelineError::PollingTransport(msg) => AppError::PollingTransport(msg),
            PipelineError::PollingTimeout(msg) => AppError::PollingTimeout(msg),
            PipelineError::Cancelled => AppError::Internal("request was cancelled".to_string()),
        }
    }
}
