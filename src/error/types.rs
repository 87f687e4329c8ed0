/**
 * API Error Types
 *
 * This module defines the error kinds that handlers can return. Each kind
 * maps to a fixed HTTP status code:
 *
 * - `InvalidInput`       -> 400 (missing or malformed request fields)
 * - `UsernameTaken`      -> 400 (registration with an existing username)
 * - `InvalidCredentials` -> 401 (unknown user or wrong password, merged)
 * - `NotFound`           -> 404 (unmatched route or missing static asset)
 * - `MethodNotAllowed`   -> 405 (known path, wrong method)
 * - `Internal`           -> 500 (database/hashing/signing failures)
 *
 * All errors are terminal for the request; nothing is retried and nothing
 * is fatal to the process.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::auth::store::StoreError;

/// Errors returned by HTTP handlers
///
/// `InvalidCredentials` deliberately covers both "no such user" and "wrong
/// password" so the two cases are indistinguishable to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[error("{message}")]
    InvalidInput {
        /// Human-readable error message
        message: String,
    },

    /// Registration attempted with a username that already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// Unknown username or wrong password (merged)
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Unmatched route or missing static asset
    #[error("{message}")]
    NotFound {
        /// Human-readable error message
        message: String,
    },

    /// Known path called with the wrong HTTP method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Unexpected server-side failure; the detail is logged, not returned
    #[error("internal error: {message}")]
    Internal {
        /// Internal detail, never sent to the client
        message: String,
    },
}

impl ApiError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ApiError::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::UsernameTaken => StatusCode::BAD_REQUEST,
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client
    ///
    /// Internal errors return a generic message; the real detail stays in
    /// the logs.
    pub fn public_message(&self) -> String {
        match self {
            ApiError::Internal { .. } => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername => ApiError::UsernameTaken,
            StoreError::Database(e) => ApiError::internal(format!("database error: {e}")),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        ApiError::internal(format!("password hashing error: {err}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        ApiError::internal(format!("token signing error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::invalid_input("missing").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::UsernameTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::not_found("404 Not Found").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn test_internal_detail_is_not_public() {
        let err = ApiError::internal("database error: table users is missing");
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_duplicate_username_maps_to_taken() {
        let err: ApiError = StoreError::DuplicateUsername.into();
        assert!(matches!(err, ApiError::UsernameTaken));
    }
}
