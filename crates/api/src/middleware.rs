use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use pawsboard_auth::{ADMIN_LOGIN_PATH, AuthorizationOutcome, SessionCredentials};

use crate::app::GateState;

/// Cookie carrying the opaque session token.
pub const SESSION_COOKIE: &str = "pb_session";

/// Gate middleware for admin-only routes.
///
/// Denied requests are answered with a `303 See Other` to the outcome's
/// redirect target; authorized requests proceed with the resolved
/// [`pawsboard_auth::Principal`] inserted as a request extension.
pub async fn admin_gate_middleware(
    State(state): State<GateState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let credentials = session_credentials(req.headers());

    match state.gate.require_admin(&credentials).await {
        AuthorizationOutcome::Authorized(principal) => {
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        denied => Redirect::to(denied.redirect_path().unwrap_or(ADMIN_LOGIN_PATH)).into_response(),
    }
}

/// Build session credentials from the request headers.
pub fn session_credentials(headers: &HeaderMap) -> SessionCredentials {
    match extract_session_cookie(headers) {
        Some(token) => SessionCredentials::from_token(token),
        None => SessionCredentials::anonymous(),
    }
}

fn extract_session_cookie(headers: &HeaderMap) -> Option<String> {
    let header = headers.get(header::COOKIE)?.to_str().ok()?;

    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn missing_cookie_header_is_anonymous() {
        assert_eq!(
            session_credentials(&HeaderMap::new()),
            SessionCredentials::anonymous()
        );
    }

    #[test]
    fn session_cookie_is_extracted() {
        let headers = headers_with_cookie("theme=dark; pb_session=abc123; lang=en");
        assert_eq!(session_credentials(&headers).token(), Some("abc123"));
    }

    #[test]
    fn empty_session_cookie_is_anonymous() {
        let headers = headers_with_cookie("pb_session=");
        assert_eq!(session_credentials(&headers).token(), None);
    }

    #[test]
    fn unrelated_cookies_are_ignored() {
        let headers = headers_with_cookie("pb_session_old=xyz; other=1");
        assert_eq!(session_credentials(&headers).token(), None);
    }
}
