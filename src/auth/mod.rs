//! Authentication Module
//!
//! This module handles user registration, credential verification, and
//! session management. It provides HTTP handlers for the authentication
//! endpoints and owns the user table and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── store.rs        - User model and account store (SQLite)
//! ├── sessions.rs     - Session token signing and cookies
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - User authentication handler
//!     ├── logout.rs   - Session teardown handler
//!     └── me.rs       - Get current user handler
//! ```
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage; plaintext is never kept
//! - Session tokens are signed and time-bounded, carried in an HttpOnly cookie
//! - Unknown user and wrong password both return 401 (no information leakage)

/// User model and account store
pub mod store;

/// Session token signing and cookie helpers
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::types::{LoginRequest, MessageResponse, RegisterRequest, UserResponse};
pub use handlers::{login, logout, me, register};
pub use sessions::SessionSigner;
pub use store::AccountStore;
