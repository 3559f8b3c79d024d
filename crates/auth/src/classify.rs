//! Role classification over a principal's metadata bags.

use serde_json::Value;

use crate::{Principal, Role};

/// Metadata field holding the role claim, in every bag.
const ROLE_FIELD: &str = "role";

/// Ordered role sources; the first non-empty string wins.
///
/// The order is compatibility-critical: existing accounts were granted admin
/// through any of these locations, so it must stay exactly
/// `[user_metadata, app_metadata, legacy_metadata]`. Note that the
/// user-writable bag outranks the server-controlled one here — admin access
/// must therefore never be provisioned by writing user metadata alone.
const ROLE_SOURCES: &[fn(&Principal) -> Option<&Value>] = &[
    |p| p.user_metadata.get(ROLE_FIELD),
    |p| p.app_metadata.get(ROLE_FIELD),
    |p| p.legacy_metadata.get(ROLE_FIELD),
];

/// Resolve a principal's role claim.
///
/// Pure function over the metadata bags: tries each source in order and
/// returns the first non-empty string. JSON values that are not strings
/// count as absent, as do empty strings. `None` means "no role", which every
/// caller treats as non-admin.
pub fn classify_role(principal: &Principal) -> Option<Role> {
    ROLE_SOURCES
        .iter()
        .filter_map(|source| source(principal))
        .filter_map(Value::as_str)
        .find(|role| !role.is_empty())
        .map(|role| Role::new(role.to_owned()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use proptest::option;
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::PrincipalId;

    fn principal_with(
        user_role: Option<Value>,
        app_role: Option<Value>,
        legacy_role: Option<Value>,
    ) -> Principal {
        let mut principal = Principal::new(PrincipalId::new(), Utc::now());
        if let Some(role) = user_role {
            principal.user_metadata.insert("role".to_string(), role);
        }
        if let Some(role) = app_role {
            principal.app_metadata.insert("role".to_string(), role);
        }
        if let Some(role) = legacy_role {
            principal.legacy_metadata.insert("role".to_string(), role);
        }
        principal
    }

    #[test]
    fn no_role_anywhere() {
        let principal = principal_with(None, None, None);
        assert_eq!(classify_role(&principal), None);
    }

    #[test]
    fn user_metadata_wins_over_app_metadata() {
        let principal = principal_with(Some(json!("admin")), Some(json!("guest")), None);
        assert_eq!(classify_role(&principal), Some(Role::ADMIN));
    }

    #[test]
    fn app_metadata_wins_over_legacy() {
        let principal = principal_with(None, Some(json!("admin")), Some(json!("guest")));
        assert_eq!(classify_role(&principal), Some(Role::ADMIN));
    }

    #[test]
    fn legacy_metadata_is_last_resort() {
        let principal = principal_with(None, None, Some(json!("admin")));
        assert_eq!(classify_role(&principal), Some(Role::ADMIN));
    }

    #[test]
    fn empty_string_is_absent() {
        let principal = principal_with(Some(json!("")), Some(json!("staff")), None);
        assert_eq!(classify_role(&principal), Some(Role::new("staff")));
    }

    #[test]
    fn non_string_values_are_absent() {
        let principal = principal_with(Some(json!(42)), Some(json!(["admin"])), Some(json!("admin")));
        assert_eq!(classify_role(&principal), Some(Role::ADMIN));
    }

    #[test]
    fn unknown_role_is_preserved_verbatim() {
        let principal = principal_with(Some(json!("groomer")), None, None);
        let role = classify_role(&principal).unwrap();
        assert_eq!(role.as_str(), "groomer");
        assert!(!role.is_admin());
    }

    proptest! {
        /// Classification always equals the first non-empty entry of the
        /// ordered sources, for arbitrary bag contents.
        #[test]
        fn first_non_empty_source_wins(
            user in option::of("[a-z]{0,8}"),
            app in option::of("[a-z]{0,8}"),
            legacy in option::of("[a-z]{0,8}"),
        ) {
            let principal = principal_with(
                user.clone().map(Value::from),
                app.clone().map(Value::from),
                legacy.clone().map(Value::from),
            );

            let expected = [user, app, legacy]
                .into_iter()
                .flatten()
                .find(|role| !role.is_empty());

            prop_assert_eq!(
                classify_role(&principal).map(|r| r.as_str().to_owned()),
                expected
            );
        }
    }
}
