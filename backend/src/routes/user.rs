//! User route definitions

use axum::{routing::get, Router};

use crate::handlers::{
    create_user, delete_user, get_user, list_users, route_not_found, update_user,
};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).post(create_user).fallback(route_not_found),
        )
        .route(
            "/users/:id",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .fallback(route_not_found),
        )
}
