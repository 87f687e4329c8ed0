//! Middleware Module
//!
//! Request extractors shared by the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! middleware/
//! ├── mod.rs     - Module exports
//! ├── auth.rs    - CurrentUser session-cookie extractor
//! └── extract.rs - ValidJson fail-closed body extractor
//! ```

/// Session-cookie authentication extractor
pub mod auth;

/// Schema-validated JSON body extractor
pub mod extract;

// Re-export commonly used types
pub use auth::CurrentUser;
pub use extract::ValidJson;
