//! Session-bound user context
//!
//! The authenticated user id lives server-side in the session record; the
//! client only holds the opaque session cookie. Handlers receive the id as
//! explicit context through the [`CurrentUser`] extractor and resolve it
//! against the user store themselves — nothing is cached across requests.

use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;
use uuid::Uuid;

/// Session key under which the authenticated user id is stored.
pub const USER_ID_KEY: &str = "user_id";

/// Per-request user context read from the session.
///
/// `user_id` is `None` for anonymous requests (no session, or a session
/// with no bound user).
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub user_id: Option<Uuid>,
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Requires the SessionManagerLayer to be installed on the router.
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, err)| ApiError::Internal(anyhow::anyhow!("{err}")))?;

        let user_id = session.get::<Uuid>(USER_ID_KEY).await?;

        Ok(CurrentUser { user_id })
    }
}
