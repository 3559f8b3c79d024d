use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Identity of an authenticated principal (human user, service account, etc).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipalId(Uuid);

impl PrincipalId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PrincipalId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for PrincipalId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for PrincipalId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<PrincipalId> for Uuid {
    fn from(value: PrincipalId) -> Self {
        value.0
    }
}

impl FromStr for PrincipalId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// Read-only view of the authenticated caller for a single request.
///
/// Principals are issued by the identity provider; this crate never mutates
/// one. The provider stores metadata in three places, reflecting its own
/// history:
///
/// - `user_metadata` — supplied by the caller at sign-up/sign-in time and
///   writable by the user themselves;
/// - `app_metadata` — writable only by privileged server-side processes;
/// - `legacy_metadata` — top-level metadata on accounts that predate the
///   split into the two bags above.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: PrincipalId,

    pub email: Option<String>,

    #[serde(default)]
    pub user_metadata: Map<String, Value>,

    #[serde(default)]
    pub app_metadata: Map<String, Value>,

    #[serde(default)]
    pub legacy_metadata: Map<String, Value>,

    /// Account creation time as reported by the identity provider.
    pub created_at: DateTime<Utc>,
}

impl Principal {
    /// A principal with empty metadata bags and no email.
    pub fn new(id: PrincipalId, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: None,
            user_metadata: Map::new(),
            app_metadata: Map::new(),
            legacy_metadata: Map::new(),
            created_at,
        }
    }
}
