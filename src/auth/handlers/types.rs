/**
 * Authentication Request and Response Types
 *
 * Request bodies are decoded through a schema-validated step that fails
 * closed: absent fields default to the empty string, and handlers reject
 * empty fields as invalid input. Responses never carry password material.
 */

use serde::{Deserialize, Serialize};

/// Body of POST /register
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Desired username; missing decodes as empty and is rejected
    #[serde(default)]
    pub username: String,
    /// Plaintext password, hashed before storage
    #[serde(default)]
    pub password: String,
}

/// Body of POST /login
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Success envelope for register/login/logout
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of GET /me
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}
