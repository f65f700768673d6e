use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::chat::{ChatRequest, ChatResponse, ChatService, ChatServiceApi},
    error::{AppError, AppResult},
};

pub struct ChatController {
    chat_service: Arc<ChatService>,
}

impl ChatController {
    pub fn new(chat_service: Arc<ChatService>) -> Self {
        Self { chat_service }
    }

    /// POST /chat - Generate an assistant reply to a user message
    pub async fn chat(
        State(controller): State<Arc<ChatController>>,
        Json(request): Json<ChatRequest>,
    ) -> AppResult<Json<ChatResponse>> {
        if request.message.trim().is_empty() {
            return Err(AppError::BadRequest("Message cannot be empty".to_string()));
        }

        let reply = controller.chat_service.reply(&request.message).await?;

        Ok(Json(ChatResponse { reply }))
    }
}
