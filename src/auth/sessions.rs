/**
 * Session Tokens and Cookies
 *
 * This module handles session token generation and validation. A session is
 * a signed HS256 token binding a user id to an expiry time, delivered to
 * the client in an HttpOnly cookie.
 *
 * # Lifecycle
 *
 * Anonymous -> (successful login) -> Authenticated -> (logout | expiry) -> Anonymous
 *
 * Logout clears the cookie; tokens also die on their own at `exp`. There is
 * no server-side session table.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::store::User;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Claims carried by a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: i64,
    /// Username at login time
    pub username: String,
    /// Session token id, used to correlate log lines
    pub jti: Uuid,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// A freshly issued session token
#[derive(Debug)]
pub struct IssuedSession {
    /// Encoded, signed token
    pub token: String,
    /// Token id, for logging
    pub jti: Uuid,
}

/// Signs and verifies session tokens
///
/// The keys are derived once from the configured secret at startup and held
/// in application state; no per-request secret lookups.
pub struct SessionSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl SessionSigner {
    /// Create a signer from the configured secret and session TTL
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a session token for a user
    ///
    /// The token expires `ttl_secs` after issue.
    pub fn issue(&self, user: &User) -> Result<IssuedSession, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp() as u64;
        let jti = Uuid::new_v4();

        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            jti,
            exp: now + self.ttl_secs,
            iat: now,
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;
        Ok(IssuedSession { token, jti })
    }

    /// Verify and decode a session token
    ///
    /// Fails on a bad signature, a malformed token, or an expired `exp`.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }

    /// Build the Set-Cookie value that establishes a session
    pub fn session_cookie(&self, token: &str) -> String {
        format!(
            "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
            self.ttl_secs
        )
    }

    /// Build the Set-Cookie value that clears the session
    ///
    /// Safe to send whether or not a session exists; clearing an absent
    /// cookie is a no-op on the client.
    pub fn clear_cookie() -> String {
        format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::store::User;

    fn test_user() -> User {
        User {
            id: 7,
            username: "alice".to_string(),
            password_hash: "irrelevant".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let signer = SessionSigner::new("test-secret", 3600);
        let issued = signer.issue(&test_user()).unwrap();
        assert!(!issued.token.is_empty());

        let claims = signer.verify(&issued.token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.jti, issued.jti);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let signer = SessionSigner::new("test-secret", 3600);
        let other = SessionSigner::new("different-secret", 3600);

        let issued = signer.issue(&test_user()).unwrap();
        assert!(other.verify(&issued.token).is_err());
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let signer = SessionSigner::new("test-secret", 3600);
        assert!(signer.verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_expired_token() {
        let signer = SessionSigner::new("test-secret", 3600);

        // Expired well past the default validation leeway
        let now = Utc::now().timestamp() as u64;
        let claims = Claims {
            sub: 7,
            username: "alice".to_string(),
            jti: Uuid::new_v4(),
            exp: now - 600,
            iat: now - 4200,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(signer.verify(&token).is_err());
    }

    #[test]
    fn test_cookie_values() {
        let signer = SessionSigner::new("test-secret", 3600);
        let cookie = signer.session_cookie("abc");
        assert!(cookie.starts_with("session=abc;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Max-Age=3600"));

        let clear = SessionSigner::clear_cookie();
        assert!(clear.starts_with("session=;"));
        assert!(clear.contains("Max-Age=0"));
    }
}
