use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Entry Router Module
///
/// Endpoints that work with or without a session. The entry screen applies its own guard:
/// signed-in viewers are redirected to their landing route instead of seeing the form.
pub fn entry_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness check for monitors and load balancers.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // Login screen, or 303 to the landing route of the current role.
        .route("/", get(handlers::entry))
        // POST /login
        // Role + name (+ ignored password). Blank names answer 422 without touching the session.
        .route("/login", post(handlers::login))
        // POST /logout
        // Idempotent; always lands back on the entry screen.
        .route("/logout", post(handlers::logout))
        // GET /session
        .route("/session", get(handlers::get_session))
}
