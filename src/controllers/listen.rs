use axum::{
    extract::{Multipart, State},
    Json,
};
use std::sync::Arc;

use crate::{
    domain::transcription::{TranscriptionResponse, TranscriptionService, TranscriptionServiceApi},
    error::{AppError, AppResult},
};

const AUDIO_FIELD: &str = "audio";

pub struct ListenController {
    transcription_service: Arc<TranscriptionService>,
}

impl ListenController {
    pub fn new(transcription_service: Arc<TranscriptionService>) -> Self {
        Self {
            transcription_service,
        }
    }

    /// POST /listen - Transcribe an uploaded audio file
    ///
    /// Expects a multipart body with the audio under the `audio` field.
    pub async fn listen(
        State(controller): State<Arc<ListenController>>,
        mut multipart: Multipart,
    ) -> AppResult<Json<TranscriptionResponse>> {
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(format!("Malformed multipart body: {}", e)))?
        {
            if field.name() != Some(AUDIO_FIELD) {
                continue;
            }

            let filename = field
                .file_name()
                .unwrap_or("audio.webm")
                .to_string();
            let audio = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read audio field: {}", e)))?
                .to_vec();

            if audio.is_empty() {
                return Err(AppError::BadRequest("Audio file is empty".to_string()));
            }

            let text = controller
                .transcription_service
                .transcribe(&filename, audio)
                .await?;

            return Ok(Json(TranscriptionResponse { text }));
        }

        Err(AppError::BadRequest(format!(
            "Missing multipart field '{}'",
            AUDIO_FIELD
        )))
    }
}
