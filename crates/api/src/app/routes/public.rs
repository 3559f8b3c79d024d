//! Public routes: health, session introspection, and the unauthorized page.

use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use serde_json::json;

use pawsboard_auth::ADMIN_LOGIN_PATH;

use crate::app::GateState;
use crate::middleware::session_credentials;

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /session — lenient admin flag for conditional UI.
///
/// Never redirects and never fails: anonymous callers simply get
/// `{"admin": false}`.
pub async fn session(State(state): State<GateState>, headers: HeaderMap) -> impl IntoResponse {
    let admin = state.gate.is_admin(&session_credentials(&headers)).await;
    Json(json!({ "admin": admin }))
}

/// GET /unauthorized — explanation page for authenticated non-admins, with
/// recovery links back home and to admin sign-in.
pub async fn unauthorized() -> impl IntoResponse {
    Json(json!({
        "error": "unauthorized",
        "message": "this account does not have admin access",
        "links": {
            "home": "/",
            "admin_login": ADMIN_LOGIN_PATH,
        },
    }))
}
