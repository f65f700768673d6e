use async_trait::async_trait;
use thiserror::Error;

/// A video generation job as reported by the provider.
///
/// `status` is the provider's own vocabulary and is passed through untouched.
/// A non-empty `result_url` means the job is done regardless of what `status`
/// says, so callers check the URL first.
#[derive(Debug, Clone)]
pub struct VideoJob {
    pub id: String,
    pub status: String,
    pub result_url: Option<String>,
}

impl VideoJob {
    pub fn is_finished(&self) -> bool {
        self.result_url.as_deref().is_some_and(|url| !url.is_empty())
    }
}

/// Failures talking to the video generation provider.
///
/// `Rejected` and `Protocol` are kept apart because the caller treats them
/// differently: a rejection is the provider declining the request (client
/// error), a protocol error is a success response missing the fields the
/// contract promises.
#[derive(Debug, Error)]
pub enum VideoGenError {
    #[error("provider rejected the request: {0}")]
    Rejected(String),
    #[error("provider response violated the contract: {0}")]
    Protocol(String),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Provider for talking-avatar video generation.
/// Abstracts the underlying vendor (D-ID today).
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Submit a new talking-avatar job.
    ///
    /// # Arguments
    /// * `image_url` - Publicly fetchable portrait image
    /// * `audio_url` - Publicly fetchable audio the avatar speaks
    /// * `resolution` - Output height in pixels (360, 720 or 1080)
    ///
    /// # Errors
    /// `Rejected` on a non-success provider status, `Protocol` when a success
    /// response carries no job id, `Transport` when the call itself fails
    async fn submit(
        &self,
        image_url: &str,
        audio_url: &str,
        resolution: u16,
    ) -> Result<VideoJob, VideoGenError>;

    /// Fetch the current state of a previously submitted job.
    async fn fetch(&self, job_id: &str) -> Result<VideoJob, VideoGenError>;
}
