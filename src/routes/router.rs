/**
 * Router Configuration
 *
 * This module provides the main router creation function.
 *
 * # Routes
 *
 * - `POST /register` - User registration
 * - `POST /login`    - User login (sets session cookie)
 * - `GET  /logout`   - Clears the session cookie (idempotent)
 * - `GET  /me`       - Current user (requires session)
 * - `GET  /`         - Static landing page (404 if the asset is missing)
 * - `GET  /static/<asset>` - Static assets
 *
 * Known paths hit with the wrong method answer 405; everything else falls
 * through to a JSON 404. Both use the same error envelope as the API.
 */

use axum::{
    extract::State,
    handler::HandlerWithoutStateExt,
    http::Uri,
    response::Html,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::auth::handlers::{login, logout, me, register};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `state` - Application state (store, session signer, static dir)
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/register", post(register).fallback(method_not_allowed))
        .route("/login", post(login).fallback(method_not_allowed))
        .route("/logout", get(logout).fallback(method_not_allowed))
        .route("/me", get(me).fallback(method_not_allowed))
        .route("/", get(index).fallback(method_not_allowed));

    // Static assets next to the landing page; a missing asset gets the same
    // JSON 404 envelope as the rest of the surface
    let serve_dir =
        ServeDir::new(state.static_dir.clone()).not_found_service(not_found.into_service());
    let router = router.nest_service("/static", serve_dir);

    router.fallback(not_found).with_state(state)
}

/// Serve the static landing page
///
/// A missing or unreadable index.html is a 404, not a server error.
async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let path = state.static_dir.join("index.html");

    let contents = tokio::fs::read_to_string(&path).await.map_err(|e| {
        tracing::warn!("could not read {}: {}", path.display(), e);
        ApiError::not_found("404 Not Found")
    })?;

    Ok(Html(contents))
}

/// Fallback for unmatched routes
async fn not_found(uri: Uri) -> ApiError {
    tracing::debug!("no route for {uri}");
    ApiError::not_found("404 Not Found")
}

/// Fallback for known paths hit with the wrong method
async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
