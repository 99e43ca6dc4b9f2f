//! OpenAPI documentation
//!
//! The document is derived from the `#[utoipa::path]` annotations on the
//! handlers registered in [`crate::routes`]. [`crate::routes::docs_routes`]
//! serves it as JSON together with a Swagger UI.

use utoipa::OpenApi;

use crate::error::{ErrorDetails, ErrorResponse};
use crate::models::{CreateUserRequest, HealthResponse, UpdateUserRequest, User};

/// OpenAPI document for the REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Toolkit user API",
        description = "In-memory user registry: list, fetch, create, update and delete users."
    ),
    paths(
        crate::handlers::user::list_users,
        crate::handlers::user::get_user,
        crate::handlers::user::create_user,
        crate::handlers::user::update_user,
        crate::handlers::user::delete_user,
        crate::handlers::health::health_check,
    ),
    components(schemas(
        User,
        CreateUserRequest,
        UpdateUserRequest,
        HealthResponse,
        ErrorResponse,
        ErrorDetails
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/users"));
        assert!(paths.contains_key("/users/{id}"));
        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn test_document_registers_user_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components present").schemas;

        assert!(schemas.contains_key("User"));
        assert!(schemas.contains_key("ErrorResponse"));
    }
}
