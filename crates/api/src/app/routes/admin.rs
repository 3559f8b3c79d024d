//! Admin dashboard routes.
//!
//! `dashboard` only runs behind the gate middleware, which guarantees the
//! `Principal` extension is present. `login` is the redirect target for
//! unauthenticated requests and must stay outside the gate.

use axum::{Json, extract::Extension, response::IntoResponse};
use serde_json::json;

use pawsboard_auth::Principal;

/// GET /admin — dashboard summary for the authorized admin.
pub async fn dashboard(Extension(principal): Extension<Principal>) -> impl IntoResponse {
    Json(json!({
        "principal": principal.id.to_string(),
        "email": principal.email,
        "member_since": principal.created_at,
    }))
}

/// GET /admin/login — admin sign-in surface (rendering is out of scope;
/// this placeholder keeps the path routable).
pub async fn login() -> impl IntoResponse {
    Json(json!({ "page": "admin_login" }))
}
