use axum::{Json, extract::State};
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::fallback::{UPSTREAM_UNAVAILABLE, offline_reply},
    state::SharedState,
};

/// The chat relay. Exactly two outcomes, both HTTP 200: model text, or a
/// localized offline fallback. Upstream failures never surface as errors to
/// the caller. The request body is parsed once and reused on both paths.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let trimmed = payload.message.trim();
    if trimmed.is_empty() {
        return Err(AppError::BadRequest("Message cannot be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    let language = payload.language;
    tracing::debug!(
        %request_id,
        language = language.as_str(),
        context = payload.context.as_deref().unwrap_or_default(),
        "handling chat message"
    );
    state.metrics.increment_language(language.as_str()).await;

    match state.gemini.generate_reply(trimmed, language).await {
        Ok(text) => {
            state.metrics.increment_source("model").await;
            Ok(Json(ChatResponse {
                response: text,
                error: None,
            }))
        }
        Err(err) => {
            tracing::warn!(%request_id, error = %err, "upstream unavailable, serving offline reply");
            state.metrics.increment_source("fallback").await;
            Ok(Json(ChatResponse {
                response: offline_reply(language).to_string(),
                error: Some(UPSTREAM_UNAVAILABLE.to_string()),
            }))
        }
    }
}
