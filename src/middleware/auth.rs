/**
 * Authentication Extractor
 *
 * This module provides the `CurrentUser` extractor for handlers that need
 * an authenticated caller. It reads the session cookie, verifies the signed
 * token, and confirms the account still exists.
 *
 * Handlers that merely want to know whether a session is present (logout)
 * take `Option<CurrentUser>`, which never rejects.
 */

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header::COOKIE, request::Parts},
};
use uuid::Uuid;

use crate::auth::sessions::SESSION_COOKIE;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the session cookie
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    /// Session token id, for logging
    pub jti: Uuid,
}

/// Pull the session token out of the Cookie header, if any
fn session_token(parts: &Parts) -> Option<String> {
    let raw = parts.headers.get(COOKIE)?.to_str().ok()?;
    raw.split(';').map(str::trim).find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == SESSION_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    /// Extract and verify the session
    ///
    /// 1. Read the session cookie
    /// 2. Verify signature and expiry of the token
    /// 3. Confirm the user still exists in the store
    ///
    /// Every failure mode maps to 401; a missing cookie and a forged token
    /// look the same to the caller.
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(parts).ok_or_else(|| {
            tracing::debug!("no session cookie on request");
            ApiError::InvalidCredentials
        })?;

        let claims = state.sessions.verify(&token).map_err(|e| {
            tracing::warn!("invalid session token: {e}");
            ApiError::InvalidCredentials
        })?;

        let user = state
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                tracing::warn!(id = claims.sub, "session for unknown user");
                ApiError::InvalidCredentials
            })?;

        Ok(CurrentUser {
            id: user.id,
            username: user.username,
            jti: claims.jti,
        })
    }
}

impl OptionalFromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    /// Optional form: an absent or invalid session is `None`, never an error
    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match <CurrentUser as FromRequestParts<AppState>>::from_request_parts(parts, state).await {
            Ok(user) => Ok(Some(user)),
            Err(_) => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts_with_cookie(value: &str) -> Parts {
        let request = Request::builder()
            .uri("http://example.com/me")
            .header(COOKIE, value)
            .body(())
            .unwrap();
        request.into_parts().0
    }

    #[test]
    fn test_session_token_found() {
        let parts = parts_with_cookie("theme=dark; session=abc123; lang=en");
        assert_eq!(session_token(&parts), Some("abc123".to_string()));
    }

    #[test]
    fn test_session_token_absent() {
        let parts = parts_with_cookie("theme=dark; lang=en");
        assert_eq!(session_token(&parts), None);
    }

    #[test]
    fn test_empty_session_cookie_ignored() {
        // A cleared cookie that the client still sends must not count
        let parts = parts_with_cookie("session=");
        assert_eq!(session_token(&parts), None);
    }
}
