//! Banner, health and documentation routes

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::handlers::{health_check, root, route_not_found};
use crate::state::AppState;

pub fn system_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root).fallback(route_not_found))
        .route("/health", get(health_check).fallback(route_not_found))
}

/// Swagger UI at `/swagger/`, backed by the JSON document at `/api-docs/openapi.json`
pub fn docs_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
