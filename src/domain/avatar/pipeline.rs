use super::dto::{TalkRequest, TalkResponse};
use super::error::PipelineError;
use crate::infrastructure::providers::{
    audio_public_id, AssetPublisher, SpeechSynthesizer, VideoGenError, VideoGenerator,
};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Polling cadence for the video job: one status fetch every `interval`, at
/// most `max_attempts` fetches before the request times out.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            max_attempts: 60,
        }
    }
}

/// Pipeline stages, in execution order. Only used for structured logging;
/// there are no backward transitions.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Synthesizing,
    Publishing,
    Submitting,
    Polling,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Synthesizing => "synthesizing",
            Self::Publishing => "publishing",
            Self::Submitting => "submitting",
            Self::Polling => "polling",
        };
        f.write_str(name)
    }
}

/// The talk-from-text pipeline: synthesize speech, publish the audio,
/// submit a talking-avatar job, poll until a result URL appears.
///
/// Stages run strictly in order; the first failure aborts the request with
/// that stage's error kind. The video generator is optional because its
/// credentials are optional at startup — a request without one fails before
/// any provider call is made.
pub struct TalkPipeline {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    publisher: Arc<dyn AssetPublisher>,
    video_generator: Option<Arc<dyn VideoGenerator>>,
    poll_policy: PollPolicy,
}

impl TalkPipeline {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        publisher: Arc<dyn AssetPublisher>,
        video_generator: Option<Arc<dyn VideoGenerator>>,
        poll_policy: PollPolicy,
    ) -> Self {
        Self {
            synthesizer,
            publisher,
            video_generator,
            poll_policy,
        }
    }

    /// Run the whole pipeline for one request.
    ///
    /// Every stage is raced against `cancel`, so a cancelled request stops
    /// outbound work at the next stage boundary or mid-sleep.
    pub async fn run(
        &self,
        request: &TalkRequest,
        cancel: CancellationToken,
    ) -> Result<TalkResponse, PipelineError> {
        let generator = self.video_generator.as_ref().ok_or_else(|| {
            PipelineError::Configuration("video generation credentials are missing".to_string())
        })?;

        tracing::info!(stage = %Stage::Synthesizing, voice = %request.voice, "Pipeline started");
        let audio = tokio::select! {
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            result = self
                .synthesizer
                .synthesize(&request.text, &request.voice, request.speed) =>
            {
                result.map_err(PipelineError::Synthesis)?
            }
        };

        let public_id = audio_public_id(&request.text);
        tracing::info!(
            stage = %Stage::Publishing,
            public_id = %public_id,
            audio_size_bytes = audio.bytes.len(),
            "Audio synthesized"
        );
        let asset = tokio::select! {
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            result = self.publisher.publish(audio.bytes, &public_id) => {
                result.map_err(PipelineError::Publish)?
            }
        };

        tracing::info!(
            stage = %Stage::Submitting,
            audio_url = %asset.url,
            resolution = request.resolution.pixels(),
            "Audio published"
        );
        let job = tokio::select! {
            _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
            result = generator.submit(
                &request.image_url,
                &asset.url,
                request.resolution.pixels(),
            ) => {
                result.map_err(|e| match e {
                    VideoGenError::Rejected(msg) => PipelineError::SubmissionRejected(msg),
                    VideoGenError::Protocol(msg) => PipelineError::Protocol(msg),
                    VideoGenError::Transport(msg) => PipelineError::Submission(msg),
                })?
            }
        };

        tracing::info!(stage = %Stage::Polling, job_id = %job.id, "Video job submitted");
        self.poll(generator.as_ref(), &job.id, &cancel).await
    }

    /// Poll the job until a result URL appears or the attempt budget runs out.
    ///
    /// A non-empty result URL is terminal regardless of the reported status.
    /// Any fetch failure aborts immediately; there is no retry on transport
    /// errors.
    async fn poll(
        &self,
        generator: &dyn VideoGenerator,
        job_id: &str,
        cancel: &CancellationToken,
    ) -> Result<TalkResponse, PipelineError> {
        for attempt in 1..=self.poll_policy.max_attempts {
            let job = tokio::select! {
                _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
                result = generator.fetch(job_id) => {
                    result.map_err(|e| PipelineError::PollingTransport(e.to_string()))?
                }
            };

            if job.is_finished() {
                tracing::info!(
                    job_id = %job.id,
                    status = %job.status,
                    attempts = attempt,
                    "Video job finished"
                );
                return Ok(TalkResponse {
                    // is_finished guarantees a non-empty result_url
                    video_url: job.result_url.unwrap_or_default(),
                    status: job.status,
                    id: job.id,
                });
            }

            tracing::debug!(
                job_id = %job_id,
                status = %job.status,
                attempt = attempt,
                "Video job not ready yet"
            );

            // The last attempt does not sleep afterwards
            if attempt < self.poll_policy.max_attempts {
                tokio::select! {
                    _ = cancel.cancelled() => return Err(PipelineError::Cancelled),
                    _ = tokio::time::sleep(self.poll_policy.interval) => {}
                }
            }
        }

        Err(PipelineError::PollingTimeout(format!(
            "job {} produced no result within {} polls",
            job_id, self.poll_policy.max_attempts
        )))
    }
}
