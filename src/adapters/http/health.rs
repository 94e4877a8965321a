//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use super::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /health/ - Report that the API is up
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Profile API is running",
        timestamp: Utc::now(),
    })
}

pub fn health_router() -> Router<AppState> {
    Router::new().route("/health/", get(health_check))
}
