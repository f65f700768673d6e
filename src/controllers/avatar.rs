use axum::{extract::State, Json};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::{
    domain::avatar::{TalkPipeline, TalkRequest, TalkResponse},
    error::{AppError, AppResult},
};

pub struct AvatarController {
    pipeline: Arc<TalkPipeline>,
    /// Server shutdown token; each request polls under a child of it.
    shutdown: CancellationToken,
}

impl AvatarController {
    pub fn new(pipeline: Arc<TalkPipeline>, shutdown: CancellationToken) -> Self {
        Self { pipeline, shutdown }
    }

    /// POST /avatar/talk_from_tts - Turn text into a talking-avatar video
    pub async fn talk_from_tts(
        State(controller): State<Arc<AvatarController>>,
        Json(request): Json<TalkRequest>,
    ) -> AppResult<Json<TalkResponse>> {
        validate(&request)?;

        let cancel = controller.shutdown.child_token();
        let response = controller.pipeline.run(&request, cancel).await?;

        Ok(Json(response))
    }
}

fn validate(request: &TalkRequest) -> AppResult<()> {
    if request.text.trim().is_empty() {
        return Err(AppError::BadRequest("Text cannot be empty".to_string()));
    }

    if request.speed <= 0.0 {
        return Err(AppError::BadRequest(
            "Speed must be a positive number".to_string(),
        ));
    }

    if request.image_url.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Image URL cannot be empty".to_string(),
        ));
    }

    Ok(())
}
