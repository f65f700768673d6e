use super::asset_publisher::{AssetPublisher, PublishedAsset};
use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};

const CLOUDINARY_API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

/// Cloudinary implementation of the asset publisher.
///
/// Audio uploads go to the `video` resource type; Cloudinary files audio and
/// video together.
pub struct CloudinaryPublisher {
    cloud_name: String,
    api_key: String,
    api_secret: String,
    http_client: reqwest::Client,
}

impl CloudinaryPublisher {
    pub fn new(cloud_name: String, api_key: String, api_secret: String) -> Self {
        Self {
            cloud_name,
            api_key,
            api_secret,
            http_client: reqwest::Client::new(),
        }
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/video/upload", CLOUDINARY_API_BASE_URL, self.cloud_name)
    }
}

/// Compute the upload signature: SHA-256 hex over the signed parameters in
/// alphabetical order with the API secret appended. `file`, `api_key` and
/// `signature` itself are excluded from signing per the Cloudinary contract.
fn sign_upload(public_id: &str, timestamp: i64, api_secret: &str) -> String {
    let to_sign = format!(
        "overwrite=true&public_id={}&timestamp={}{}",
        public_id, timestamp, api_secret
    );
    let digest = Sha256::digest(to_sign.as_bytes());
    format!("{digest:x}")
}

#[async_trait]
impl AssetPublisher for CloudinaryPublisher {
    async fn publish(&self, audio: Vec<u8>, public_id: &str) -> Result<PublishedAsset, String> {
        let timestamp = Utc::now().timestamp();
        let signature = sign_upload(public_id, timestamp, &self.api_secret);

        tracing::info!(
            public_id = public_id,
            audio_size_bytes = audio.len(),
            "Uploading audio to Cloudinary"
        );

        let file_part = reqwest::multipart::Part::bytes(audio)
            .file_name(format!("{}.mp3", public_id))
            .mime_str("audio/mpeg")
            .map_err(|e| format!("Invalid upload content type: {}", e))?;

        let form = reqwest::multipart::Form::new()
            .part("file", file_part)
            .text("api_key", self.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("public_id", public_id.to_string())
            .text("overwrite", "true")
            .text("signature", signature);

        let response = self
            .http_client
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| format!("Cloudinary upload failed: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!(
                status = %status,
                public_id = public_id,
                "Cloudinary upload rejected"
            );
            return Err(format!("Cloudinary returned {}: {}", status, error_text));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse Cloudinary response: {}", e))?;

        tracing::info!(
            public_id = %uploaded.public_id,
            url = %uploaded.secure_url,
            "Audio published"
        );

        Ok(PublishedAsset {
            url: uploaded.secure_url,
            public_id: uploaded.public_id,
        })
    }
}
