//! Catch-all for requests no route answers

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Unknown path, or a known path with a method it does not serve
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound(format!("{} {}", method, uri.path()))
}
