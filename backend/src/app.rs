//! Router assembly
//!
//! [`build_app`] is used by the binary and by the integration tests, so both
//! exercise the same routing table and middleware.

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::handlers::route_not_found;
use crate::middleware;
use crate::routes;
use crate::state::AppState;

/// Build the complete application router
pub fn build_app(config: &Config, state: AppState) -> Router {
    Router::new()
        .merge(routes::system_routes())
        .merge(routes::docs_routes())
        .merge(routes::user_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(configure_cors(config))
                .layer(axum::middleware::from_fn(middleware::request_tracing)),
        )
}

fn configure_cors(config: &Config) -> CorsLayer {
    let Some(allowed_origins) = config.cors_allowed_origins.as_deref() else {
        if config.environment.is_production() {
            tracing::warn!("CORS_ALLOWED_ORIGINS not set in production, allowing all origins");
        } else {
            tracing::debug!("CORS_ALLOWED_ORIGINS not set, allowing all origins");
        }
        return CorsLayer::permissive();
    };

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers(Any)
}
