use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{TtsRequest, TtsResponse, TtsService, TtsServiceApi},
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - Synthesize text to speech and return the audio URL
    pub async fn synthesize(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsRequest>,
    ) -> AppResult<Json<TtsResponse>> {
        validate(&request)?;

        let url = controller
            .tts_service
            .synthesize_to_url(&request.text, &request.voice, request.speed)
            .await?;

        Ok(Json(TtsResponse { url }))
    }
}

fn validate(request: &TtsRequest) -> AppResult<()> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    if request.speed <= 0.0 {
        return Err(AppError::BadRequest(
            "Speed must be a positive number".to_string(),
        ));
    }

    Ok(())
}
