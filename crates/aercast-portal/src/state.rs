//! Shared application state for the portal.

use std::sync::Arc;

use crate::sessions::SessionStore;
use crate::users::{CredentialStore, MemoryCredentials};

pub struct PortalState {
    pub credentials: Arc<dyn CredentialStore>,
    pub sessions: SessionStore,
}

impl PortalState {
    pub fn new() -> Self {
        Self {
            credentials: Arc::new(MemoryCredentials::new()),
            sessions: SessionStore::new(),
        }
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::new()
    }
}

pub type SharedState = Arc<PortalState>;
