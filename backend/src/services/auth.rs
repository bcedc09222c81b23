//! Authentication service
//!
//! Credential checking over the user store. Password hashing and
//! verification run on the blocking thread pool. Session manipulation
//! stays in the HTTP layer; this service only deals in users.

use crate::auth::PasswordService;
use crate::error::ApiError;
use crate::repositories::{is_unique_violation, UserRecord, UserRepository};
use auth_service_shared::types::UserInfo;
use auth_service_shared::validation::{validate_password, validate_username};
use sqlx::PgPool;
use uuid::Uuid;

/// Authentication operations
pub struct AuthService;

impl AuthService {
    /// Register a new user.
    ///
    /// Validates both fields, hashes the password, and inserts in a single
    /// statement. A duplicate username is reported by the store's unique
    /// constraint and mapped to a conflict error.
    pub async fn register(
        pool: &PgPool,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        validate_username(username).map_err(ApiError::Validation)?;
        validate_password(password).map_err(ApiError::Validation)?;

        let password_hash = PasswordService::hash_async(password.to_string())
            .await
            .map_err(ApiError::Internal)?;

        match UserRepository::create(pool, username, &password_hash).await {
            Ok(user) => Ok(user),
            Err(err) if is_unique_violation(&err) => Err(ApiError::Conflict(format!(
                "User {} is already registered.",
                username
            ))),
            Err(err) => Err(err.into()),
        }
    }

    /// Check credentials and return the matching user.
    ///
    /// The error message distinguishes an unknown username from a wrong
    /// password; that disclosure is part of the API contract.
    pub async fn login(
        pool: &PgPool,
        username: &str,
        password: &str,
    ) -> Result<UserRecord, ApiError> {
        let user = UserRepository::find_by_username(pool, username)
            .await?
            .ok_or_else(|| ApiError::Auth("Incorrect username.".to_string()))?;

        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::Auth("Incorrect password.".to_string()));
        }

        Ok(user)
    }

    /// Resolve the session-bound user id against the store.
    ///
    /// Runs on every request; an id that no longer resolves (user deleted
    /// out of band) degrades to anonymous rather than erroring.
    pub async fn current_user(
        pool: &PgPool,
        user_id: Option<Uuid>,
    ) -> Result<Option<UserInfo>, ApiError> {
        let Some(id) = user_id else {
            return Ok(None);
        };

        let user = UserRepository::find_by_id(pool, id).await?;

        Ok(user.map(|u| UserInfo {
            id: u.id,
            username: u.username,
        }))
    }
}

#[cfg(test)]
mod tests {
    // Database-backed flows are covered in tests/auth_integration_test.rs;
    // validation short-circuits are covered at the route level without a
    // database in routes/auth_tests.rs.
}
