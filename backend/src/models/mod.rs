//! Data models for the user registry API

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// User record as stored and as rendered on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Store-assigned identifier, never reused
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "Alice")]
    pub name: String,
}

/// Request body for `POST /users`
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Alice")]
    pub name: String,
}

/// Request body for `PUT /users/:id`
///
/// `id` is accepted for compatibility with clients that echo the whole
/// record back. The path parameter is authoritative.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub id: Option<i64>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    #[schema(example = "Bob")]
    pub name: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub users: usize,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_shape() {
        let user = User {
            id: 1,
            name: "Alice".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":1,"name":"Alice"}"#
        );
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert!(request.validate().is_err());

        let request: CreateUserRequest = serde_json::from_str(r#"{"name":"Alice"}"#).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_requires_name() {
        assert!(serde_json::from_str::<CreateUserRequest>("{}").is_err());
        assert!(serde_json::from_str::<CreateUserRequest>(r#"{"name":42}"#).is_err());
    }

    #[test]
    fn test_update_request_optional_id() {
        let request: UpdateUserRequest = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(request.id, None);

        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"id":7,"name":"Bob"}"#).unwrap();
        assert_eq!(request.id, Some(7));
    }
}
