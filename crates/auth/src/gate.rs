//! Admin authorization gate.
//!
//! The gate composes session resolution and role classification into a
//! three-way decision. It is policy only: it never writes a response or
//! performs a redirect itself — callers inspect the returned
//! [`AuthorizationOutcome`] and apply the transport effect.

use tracing::{debug, warn};

use crate::{Principal, SessionCredentials, SessionResolver, classify_role};

/// Sign-in surface for the admin dashboard.
///
/// The literal path is load-bearing: it is bookmarked and linked externally.
pub const ADMIN_LOGIN_PATH: &str = "/admin/login";

/// Explanation page shown to authenticated non-admins.
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Result of gating one request. Computed fresh per request, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthorizationOutcome {
    /// No resolvable session: absent, expired, or the provider failed.
    Unauthenticated,

    /// Authenticated, but the resolved role is not admin.
    Forbidden,

    /// Authenticated admin; protected handling may proceed.
    Authorized(Principal),
}

impl AuthorizationOutcome {
    /// Where to send the client when the gate denies a request.
    ///
    /// The two targets differ so the client can offer distinct recovery
    /// paths: sign in, versus ask an admin for access.
    pub fn redirect_path(&self) -> Option<&'static str> {
        match self {
            AuthorizationOutcome::Unauthenticated => Some(ADMIN_LOGIN_PATH),
            AuthorizationOutcome::Forbidden => Some(UNAUTHORIZED_PATH),
            AuthorizationOutcome::Authorized(_) => None,
        }
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, AuthorizationOutcome::Authorized(_))
    }
}

/// Admin gate over a [`SessionResolver`].
///
/// The resolver is an explicit collaborator rather than ambient state so
/// tests can substitute a fake.
#[derive(Debug, Clone)]
pub struct AdminGate<R> {
    resolver: R,
}

impl<R: SessionResolver> AdminGate<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Strict gate for admin-only surfaces.
    ///
    /// Provider failures are logged and treated as "no session"; no error
    /// reaches the caller.
    pub async fn require_admin(&self, credentials: &SessionCredentials) -> AuthorizationOutcome {
        let principal = match self.resolver.resolve(credentials).await {
            Ok(Some(principal)) => principal,
            Ok(None) => return AuthorizationOutcome::Unauthenticated,
            Err(e) => {
                warn!(error = %e, "session resolution failed; treating request as unauthenticated");
                return AuthorizationOutcome::Unauthenticated;
            }
        };

        match classify_role(&principal) {
            Some(role) if role.is_admin() => {
                debug!(principal = %principal.id, "admin authorized");
                AuthorizationOutcome::Authorized(principal)
            }
            _ => AuthorizationOutcome::Forbidden,
        }
    }

    /// Lenient yes/no for conditional UI and non-gating logic.
    ///
    /// Never redirects, never errors: any resolution failure is `false`.
    pub async fn is_admin(&self, credentials: &SessionCredentials) -> bool {
        match self.resolver.resolve(credentials).await {
            Ok(Some(principal)) => classify_role(&principal).is_some_and(|role| role.is_admin()),
            Ok(None) => false,
            Err(e) => {
                debug!(error = %e, "session resolution failed");
                false
            }
        }
    }
}
