/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The account store handle (shared SQLite pool)
 * - The session signer (keys derived once at startup)
 * - The static asset directory
 *
 * Handlers that only need one piece extract it directly via `FromRef`
 * instead of taking the whole state. There are no module-level singletons;
 * state lifecycle is bound to `create_app`.
 */

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::sessions::SessionSigner;
use crate::auth::store::AccountStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Account store handle
    pub store: AccountStore,
    /// Session token signer
    pub sessions: Arc<SessionSigner>,
    /// Directory holding static assets
    pub static_dir: PathBuf,
}

impl FromRef<AppState> for AccountStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SessionSigner> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
