use super::video_generator::{VideoGenError, VideoGenerator, VideoJob};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DID_API_URL: &str = "https://api.d-id.com";

#[derive(Debug, Serialize)]
struct CreateTalkRequest<'a> {
    source_url: &'a str,
    script: TalkScript<'a>,
    config: TalkConfig,
}

#[derive(Debug, Serialize)]
struct TalkScript<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    audio_url: &'a str,
}

#[derive(Debug, Serialize)]
struct TalkConfig {
    result_format: &'static str,
    stitch: bool,
    output_resolution: u16,
}

#[derive(Debug, Deserialize)]
struct TalkResponse {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    result_url: Option<String>,
}

/// D-ID implementation of the video generator.
pub struct DidVideoGenerator {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl DidVideoGenerator {
    /// `base_url` falls back to the public D-ID endpoint when not configured.
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| DEFAULT_DID_API_URL.to_string()),
            http_client: reqwest::Client::new(),
        }
    }

    fn talks_url(&self) -> String {
        format!("{}/talks", self.base_url)
    }

    fn talk_url(&self, job_id: &str) -> String {
        format!("{}/talks/{}", self.base_url, job_id)
    }
}

/// Parse a 2xx submit response. A missing or empty `id` is a contract
/// violation: the caller cannot poll without one.
fn job_from_submit_response(body: &str) -> Result<VideoJob, VideoGenError> {
    let parsed: TalkResponse = serde_json::from_str(body)
        .map_err(|e| VideoGenError::Protocol(format!("Unparseable submit response: {}", e)))?;

    let id = match parsed.id {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(VideoGenError::Protocol(
                "Submit response carries no job id".to_string(),
            ))
        }
    };

    Ok(VideoJob {
        id,
        status: parsed.status.unwrap_or_else(|| "created".to_string()),
        result_url: parsed.result_url,
    })
}

/// Parse a 2xx status fetch. Providers sometimes omit the id here, so it is
/// backfilled from the id we asked about.
fn job_from_fetch_response(body: &str, job_id: &str) -> Result<VideoJob, VideoGenError> {
    let parsed: TalkResponse = serde_json::from_str(body)
        .map_err(|e| VideoGenError::Protocol(format!("Unparseable talk status: {}", e)))?;

    Ok(VideoJob {
        id: parsed.id.unwrap_or_else(|| job_id.to_string()),
        status: parsed.status.unwrap_or_else(|| "unknown".to_string()),
        result_url: parsed.result_url,
    })
}

#[async_trait]
impl VideoGenerator for DidVideoGenerator {
    async fn submit(
        &self,
        image_url: &str,
        audio_url: &str,
        resolution: u16,
    ) -> Result<VideoJob, VideoGenError> {
        let body = CreateTalkRequest {
            source_url: image_url,
            script: TalkScript {
                kind: "audio",
                audio_url,
            },
            config: TalkConfig {
                result_format: "mp4",
                stitch: true,
                output_resolution: resolution,
            },
        };

        tracing::info!(resolution = resolution, "Submitting talk job to D-ID");

        let response = self
            .http_client
            .post(self.talks_url())
            .header("Authorization", format!("Basic {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| VideoGenError::Transport(format!("D-ID submit failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(status = %status, "D-ID rejected talk submission");
            return Err(VideoGenError::Rejected(format!(
                "D-ID returned {}: {}",
                status, error_text
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| VideoGenError::Transport(format!("D-ID submit read failed: {}", e)))?;

        let job = job_from_submit_response(&text)?;
        tracing::info!(job_id = %job.id, status = %job.status, "Talk job submitted");
        Ok(job)
    }

    async fn fetch(&self, job_id: &str) -> Result<VideoJob, VideoGenError> {
        let response = self
            .http_client
            .get(self.talk_url(job_id))
            .header("Authorization", format!("Basic {}", self.api_key))
            .send()
            .await
            .map_err(|e| VideoGenError::Transport(format!("D-ID status fetch failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(VideoGenError::Transport(format!(
                "D-ID status fetch returned {}: {}",
                status, error_text
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| VideoGenError::Transport(format!("D-ID status read failed: {}", e)))?;

        job_from_fetch_response(&text, job_id)
    }
}
