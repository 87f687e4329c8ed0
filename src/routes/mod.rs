//! Routes Module
//!
//! Router assembly: the route table, static file serving, and the 404/405
//! fallbacks.

/// Router creation
pub mod router;

// Re-export the assembly entry point
pub use router::create_router;
