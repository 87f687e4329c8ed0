//! Accountd - Main Library
//!
//! Accountd is a minimal user-account service built with Rust. It exposes
//! registration, login, logout, and a static landing page over HTTP, backed
//! by a SQLite table of user credentials.
//!
//! # Overview
//!
//! This library provides the core functionality for accountd, including:
//! - User registration with bcrypt password hashing
//! - Credential verification and session issuance
//! - Signed, time-bounded session tokens delivered via cookie
//! - Static landing page serving
//!
//! # Module Structure
//!
//! The library is organized into focused modules:
//!
//! - **`server`** - State, configuration, and app initialization
//! - **`auth`** - Account store, session signing, HTTP handlers
//! - **`middleware`** - Request extractors (session cookie, validated JSON)
//! - **`error`** - API error types and HTTP response conversion
//! - **`routes`** - Router assembly
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → bcrypt hash → user row created
//! 2. **Login**: credentials verified → signed session token set as cookie
//! 3. **Logout**: session cookie cleared (idempotent)

/// Server state, configuration, and initialization
pub mod server;

/// Authentication: account store, sessions, handlers
pub mod auth;

/// Request extractors
pub mod middleware;

/// API error types and conversions
pub mod error;

/// Router assembly
pub mod routes;
