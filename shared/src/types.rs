//! API request and response types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request
///
/// Fields default to empty strings so that a missing JSON key fails
/// validation with the field-specific message instead of a deserializer
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Public view of a user. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserInfo {
    pub id: Uuid,
    pub username: String,
}

/// Plain confirmation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user: UserInfo,
}

/// Current-user response. `user` is serialized as `null` for anonymous
/// requests, so the field must not be skipped when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub user: Option<UserInfo>,
}

/// Error response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_to_empty_strings() {
        let req: RegisterRequest = serde_json::from_str("{}").unwrap();
        assert!(req.username.is_empty());
        assert!(req.password.is_empty());

        let req: LoginRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.password.is_empty());
    }

    #[test]
    fn anonymous_current_user_serializes_to_null() {
        let body = serde_json::to_value(CurrentUserResponse { user: None }).unwrap();
        assert_eq!(body, serde_json::json!({ "user": null }));
    }

    #[test]
    fn user_info_serializes_only_id_and_username() {
        let user = UserInfo {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
        };
        let value = serde_json::to_value(&user).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, ["id", "username"]);
    }
}
