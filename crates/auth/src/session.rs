//! Session resolution seam to the external identity provider.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::Principal;

/// Request-scoped credentials handed to a [`SessionResolver`].
///
/// The token is opaque at this layer; the HTTP layer extracts it from a
/// cookie and the resolver interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCredentials {
    token: Option<String>,
}

impl SessionCredentials {
    /// Credentials for a request that carried no session token.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Failure reported by the identity provider during resolution.
///
/// These never escape the gate; they exist so resolver implementations can
/// report diagnostics distinct from "no session".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    #[error("identity provider returned a malformed principal: {0}")]
    Malformed(String),
}

/// "Get the current authenticated user" operation of the identity provider.
///
/// `Ok(None)` means no session (absent or expired). Implementations should
/// reserve `Err` for provider-side failures; the gate downgrades those to
/// "no session" after logging.
#[async_trait]
pub trait SessionResolver: Send + Sync {
    async fn resolve(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<Option<Principal>, ProviderError>;
}

#[async_trait]
impl<T: SessionResolver + ?Sized> SessionResolver for Arc<T> {
    async fn resolve(
        &self,
        credentials: &SessionCredentials,
    ) -> Result<Option<Principal>, ProviderError> {
        (**self).resolve(credentials).await
    }
}
