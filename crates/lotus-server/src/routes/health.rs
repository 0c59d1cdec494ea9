//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub completion_model: String,
    pub sentiment_model: String,
    pub version: String,
}

/// Health check endpoint.
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        completion_model: state.completion.model_name().to_string(),
        sentiment_model: state.sentiment.model_name().to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
