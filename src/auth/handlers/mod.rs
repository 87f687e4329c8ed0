//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session teardown handler
//! └── me.rs       - Get current user handler
//! ```

/// Request and response types
pub mod types;

/// User registration handler
pub mod register;

/// User authentication handler
pub mod login;

/// Session teardown handler
pub mod logout;

/// Get current user handler
pub mod me;

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::me;
pub use register::register;
