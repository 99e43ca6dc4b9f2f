//! Service banner and health probe

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::models::HealthResponse;
use crate::store::UserStore;

pub async fn root() -> &'static str {
    "Toolkit User API Server"
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check(State(store): State<Arc<UserStore>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        users: store.len().await,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
