use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::{default_model, ChatMessage, ChatResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default = "default_model")]
    pub model: String,
}

/// POST /api/chat
/// Forwards the caller's messages verbatim and returns the runtime's reply object.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    info!("Chat request received for model: {}", request.model);

    let response = state.llm.chat(&request.model, &request.messages).await?;
    Ok(Json(response))
}
