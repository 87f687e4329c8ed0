//! Server Module
//!
//! This module contains the code for initializing and configuring the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports and documentation
//! ├── state.rs  - AppState and FromRef implementations
//! ├── config.rs - Configuration loading from the environment
//! └── init.rs   - Database connection and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: port, database URL, secret key, static dir
//! 2. **Database Connection**: SQLite pool, schema created if absent
//! 3. **State Creation**: account store and session signer handles
//! 4. **Router Creation**: all routes and fallbacks

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
