//! User-related API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::config::IdMismatchPolicy;
use crate::error::{ApiError, ApiResult, ErrorResponse};
use crate::extract::{UserId, ValidatedJson};
use crate::models::{CreateUserRequest, UpdateUserRequest, User};
use crate::store::UserStore;

/// List all users in ascending id order
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User])
    ),
    tag = "users"
)]
pub async fn list_users(State(store): State<Arc<UserStore>>) -> Json<Vec<User>> {
    Json(store.list_all().await)
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn get_user(
    State(store): State<Arc<UserStore>>,
    UserId(id): UserId,
) -> ApiResult<Json<User>> {
    let user = store.get(id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body or empty name", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(store): State<Arc<UserStore>>,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = store.create(request.name).await;
    tracing::info!(user_id = user.id, "User created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace the name of an existing user
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed id or body", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn update_user(
    State(store): State<Arc<UserStore>>,
    State(policy): State<IdMismatchPolicy>,
    UserId(id): UserId,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<User>> {
    if let Some(body_id) = request.id.filter(|body_id| *body_id != id) {
        match policy {
            IdMismatchPolicy::Reject => {
                return Err(ApiError::ValidationError(format!(
                    "body id {} does not match path id {}",
                    body_id, id
                )));
            }
            IdMismatchPolicy::Ignore => {
                tracing::debug!(path_id = id, body_id, "Ignoring body id on update");
            }
        }
    }

    let user = store.update(id, request.name).await?;
    tracing::info!(user_id = user.id, "User updated");

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "Id is not an integer", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn delete_user(
    State(store): State<Arc<UserStore>>,
    UserId(id): UserId,
) -> ApiResult<StatusCode> {
    store.delete(id).await?;
    tracing::info!(user_id = id, "User deleted");

    Ok(StatusCode::NO_CONTENT)
}
