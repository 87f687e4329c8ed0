/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Validate that username and password are present and non-empty
 * 2. Look up the user by username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a session token and set it as an HttpOnly cookie
 *
 * # Security
 *
 * - Unknown username and wrong password collapse into the same 401 response,
 *   identical in status and body, so callers cannot enumerate usernames
 * - Password verification uses bcrypt's constant-time comparison
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::State,
    http::header::SET_COOKIE,
    response::{AppendHeaders, IntoResponse, Json},
};
use bcrypt::verify;

use crate::auth::handlers::types::{LoginRequest, MessageResponse};
use crate::error::ApiError;
use crate::middleware::extract::ValidJson;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing/empty username or password
/// * `401 Unauthorized` - Unknown user or wrong password (indistinguishable)
/// * `500 Internal Server Error` - Database, hash, or signing failure
pub async fn login(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        tracing::warn!("login rejected: missing username or password");
        return Err(ApiError::invalid_input(
            "Username and password are required",
        ));
    }

    // Unknown user and bad password both end in the same error value
    let user = state
        .store
        .find_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user = %request.username, "login failed: unknown username");
            ApiError::InvalidCredentials
        })?;

    let valid = verify(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!(user = %user.username, "login failed: wrong password");
        return Err(ApiError::InvalidCredentials);
    }

    let session = state.sessions.issue(&user)?;
    tracing::info!(user = %user.username, session = %session.jti, "login successful");

    let cookie = state.sessions.session_cookie(&session.token);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(MessageResponse::new("Login successful")),
    ))
}
