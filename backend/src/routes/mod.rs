//! Route definitions for the auth API
//!
//! This module organizes all API routes and applies middleware, including
//! the server-side session layer.

use crate::config::AppConfig;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use time::Duration as SessionDuration;
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore};
use tracing::warn;

mod auth;
mod health;

#[cfg(test)]
mod auth_tests;

pub use auth::auth_routes;

/// Create the main application router with all middleware
///
/// Generic over the session store so tests can run against the in-memory
/// store while production uses the Postgres-backed one.
pub fn create_router<Store>(state: AppState, session_store: Store) -> Router
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(state.config.session.cookie_name.clone())
        .with_secure(state.config.session.secure)
        .with_expiry(Expiry::OnInactivity(SessionDuration::seconds(
            state.config.session.expiry_secs,
        )));

    let cors = cors_layer(state.config());

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .nest("/api", auth::auth_routes())
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(session_layer)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS for the browser frontend.
///
/// Session cookies only cross origins with credentials enabled, which
/// rules out a wildcard origin; exactly one configured origin is allowed.
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    match config.server.cors_origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            warn!(
                origin = %config.server.cors_origin,
                "Invalid CORS origin, cross-origin requests will be refused"
            );
            layer
        }
    }
}
