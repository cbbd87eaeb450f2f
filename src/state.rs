//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::backend::Backend;
use crate::config::Config;
use crate::session::SessionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Resort REST backend
    pub backend: Arc<dyn Backend>,

    /// Live sessions
    pub sessions: SessionStore,
}

impl AppState {
    /// Create a new application state
    pub fn new(backend: Arc<dyn Backend>, config: &Config) -> Self {
        let sessions = SessionStore::new(&config.session);
        Self {
            inner: Arc::new(AppStateInner { backend, sessions }),
        }
    }

    /// Get a reference to the backend client
    pub fn backend(&self) -> &dyn Backend {
        self.inner.backend.as_ref()
    }

    /// Get a reference to the session store
    pub fn sessions(&self) -> &SessionStore {
        &self.inner.sessions
    }
}
