/**
 * Registration Handler
 *
 * This module implements the user registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that username and password are present and non-empty
 * 2. Hash the password using bcrypt
 * 3. Insert the user; the UNIQUE constraint decides duplicates atomically
 * 4. Return a success message
 *
 * # Security
 *
 * - Passwords are hashed using bcrypt with DEFAULT_COST
 * - Passwords are never logged or returned in responses
 * - There is no pre-insert existence query; two concurrent registrations of
 *   the same username race only inside the database, where exactly one wins
 */

use axum::{extract::State, response::Json};
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{MessageResponse, RegisterRequest};
use crate::auth::store::AccountStore;
use crate::error::ApiError;
use crate::middleware::extract::ValidJson;

/// Registration handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing/empty username or password, or username taken
/// * `500 Internal Server Error` - Hashing or database failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "password": "correct horse battery staple"
/// }
/// ```
pub async fn register(
    State(store): State<AccountStore>,
    ValidJson(request): ValidJson<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        tracing::warn!("registration rejected: missing username or password");
        return Err(ApiError::invalid_input(
            "Username and password are required",
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    // StoreError::DuplicateUsername converts to ApiError::UsernameTaken (400)
    let user = store.create(&request.username, &password_hash).await?;

    tracing::info!(user = %user.username, id = user.id, "user registered");

    Ok(Json(MessageResponse::new("User registered successfully")))
}
