//! In-memory session resolver (dev/test wiring).
//!
//! Production deployments substitute a resolver backed by the hosted
//! identity provider; the gate only sees the [`SessionResolver`] trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use pawsboard_auth::{Principal, ProviderError, SessionCredentials, SessionResolver};

/// Token-keyed session store.
#[derive(Debug, Default)]
pub struct InMemorySessionResolver {
    sessions: RwLock<HashMap<String, Principal>>,
}

impl InMemorySessionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session token for a principal.
    pub fn insert_session(&self, token: impl Into<String>, principal: Principal) {
        self.sessions
            .write()
            .unwrap()
            .insert(token.into(), principal);
    }

    pub fn revoke_session(&self, token: &str) {
        self.sessions.write().unwrap().remove(token);
    }
}

#[async_trait]
impl SessionResolver for InMemorySessionResolver {
    async fn resolve(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<Option<Principal>, ProviderError> {
        let Some(token) = credentials.token() else {
            return Ok(None);
        };

        Ok(self.sessions.read().unwrap().get(token).cloned())
    }
}
