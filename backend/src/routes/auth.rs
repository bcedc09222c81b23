//! Authentication routes
//!
//! Registration, login, logout, and the current-user lookup. Session state
//! is manipulated here at the HTTP boundary; credential checking lives in
//! [`AuthService`].

use crate::auth::{CurrentUser, USER_ID_KEY};
use crate::error::ApiResult;
use crate::services::AuthService;
use crate::state::AppState;
use auth_service_shared::types::{
    CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserInfo,
};
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_sessions::Session;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/user", get(current_user))
}

/// Register a new user
///
/// POST /api/register
///
/// Creates the account without establishing a session; the client logs in
/// separately.
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    AuthService::register(&state.db, &req.username, &req.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("Registration successful")),
    ))
}

/// Login with username and password
///
/// POST /api/login
///
/// On success any prior session state is discarded, the session id is
/// rotated, and the session is bound to the authenticated user.
async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let user = AuthService::login(&state.db, &req.username, &req.password).await?;

    session.clear().await;
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user.id).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserInfo {
            id: user.id,
            username: user.username,
        },
    }))
}

/// Logout
///
/// POST /api/logout
///
/// Destroys the session unconditionally; succeeds even when no session
/// existed.
async fn logout(session: Session) -> ApiResult<Json<MessageResponse>> {
    session.flush().await?;
    Ok(Json(MessageResponse::new("Logged out successfully")))
}

/// Get the current user
///
/// GET /api/user
///
/// Resolves the session-bound user id against the store on every request.
/// Anonymous requests get `{"user": null}` with 200.
async fn current_user(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let user = AuthService::current_user(&state.db, user.user_id).await?;
    Ok(Json(CurrentUserResponse { user }))
}
