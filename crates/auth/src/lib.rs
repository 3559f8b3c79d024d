//! `pawsboard-auth` — session resolution and admin authorization policy.
//!
//! This crate is intentionally decoupled from HTTP and from any concrete
//! identity provider: callers hand the gate a [`SessionResolver`] and get a
//! typed [`AuthorizationOutcome`] back. Transport effects (redirects, JSON
//! errors) belong to the calling layer.

pub mod classify;
pub mod gate;
pub mod principal;
pub mod role;
pub mod session;

pub use classify::classify_role;
pub use gate::{ADMIN_LOGIN_PATH, AdminGate, AuthorizationOutcome, UNAUTHORIZED_PATH};
pub use principal::{Principal, PrincipalId};
pub use role::Role;
pub use session::{ProviderError, SessionCredentials, SessionResolver};
