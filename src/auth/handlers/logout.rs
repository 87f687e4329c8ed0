/**
 * Logout Handler
 *
 * This module implements the session teardown handler for GET /logout.
 * Logout clears the session cookie and is idempotent: calling it with no
 * active session is not an error.
 */

use axum::{
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};

use crate::auth::handlers::types::MessageResponse;
use crate::auth::sessions::SessionSigner;
use crate::middleware::auth::CurrentUser;

/// Logout handler
///
/// Clears the session cookie whether or not a valid session was presented.
/// The current user, if any, is only used for logging.
pub async fn logout(user: Option<CurrentUser>) -> impl IntoResponse {
    match &user {
        Some(user) => {
            tracing::info!(user = %user.username, session = %user.jti, "user logged out")
        }
        None => tracing::debug!("logout without an active session"),
    }

    (
        AppendHeaders([(SET_COOKIE, SessionSigner::clear_cookie())]),
        Json(MessageResponse::new("Logged out successfully")),
    )
}
