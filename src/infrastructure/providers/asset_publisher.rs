use async_trait::async_trait;
use sha2::{Digest, Sha256};

/// A publicly reachable asset stored at the publishing provider.
#[derive(Debug, Clone)]
pub struct PublishedAsset {
    pub url: String,
    pub public_id: String,
}

/// Provider for publishing audio to a public URL.
/// Abstracts the underlying storage vendor (Cloudinary today).
#[async_trait]
pub trait AssetPublisher: Send + Sync {
    /// Upload audio bytes under a caller-chosen public id.
    ///
    /// Publishing the same id twice overwrites the stored object, so the
    /// operation is idempotent per id.
    ///
    /// # Errors
    /// Returns error if the upload fails or the provider rejects it
    async fn publish(&self, audio: Vec<u8>, public_id: &str) -> Result<PublishedAsset, String>;
}

/// Derive the public id for synthesized audio from its source text.
///
/// SHA-256 of the UTF-8 text, lowercase hex. Identical text maps to the same
/// remote object across requests and processes, so re-synthesizing a phrase
/// overwrites the previous upload instead of accumulating copies.
pub fn audio_public_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    format!("{digest:x}")
}
