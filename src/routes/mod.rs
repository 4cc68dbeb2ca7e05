// src/routes/mod.rs
pub mod chat;

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::services::metrics_manager::MetricsData;
use crate::state::SharedState;
use chat::chat_handler;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/api/chat", post(chat_handler))
        .route("/admin/metrics", get(get_metrics_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Admin-only counters. The key comes from config; with no key configured the
/// endpoint rejects everything.
async fn get_metrics_handler(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<MetricsData>, AppError> {
    let expected = state.config.admin_key.as_deref().ok_or(AppError::Unauthorized)?;
    match headers.get("x-admin-key") {
        Some(val) if val.as_bytes() == expected.as_bytes() => {}
        _ => return Err(AppError::Unauthorized),
    }
    Ok(Json(state.metrics.get_metrics().await))
}
