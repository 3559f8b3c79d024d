use std::sync::Arc;

use axum::{Router, middleware::from_fn_with_state, routing::get};

use pawsboard_auth::{AdminGate, SessionResolver};

use crate::middleware::admin_gate_middleware;

pub mod routes;

/// Shared request state: the admin gate over whatever resolver the binary
/// (or test) wired in.
#[derive(Clone)]
pub struct GateState {
    pub gate: Arc<AdminGate<Arc<dyn SessionResolver>>>,
}

/// Assemble the application router.
///
/// The admin dashboard sits behind the gate middleware; the sign-in surface
/// and the unauthorized page are deliberately outside it, since they are the
/// redirect targets for denied requests.
pub fn build_app(resolver: Arc<dyn SessionResolver>) -> Router {
    let state = GateState {
        gate: Arc::new(AdminGate::new(resolver)),
    };

    let admin = Router::new()
        .route("/admin", get(routes::admin::dashboard))
        .route_layer(from_fn_with_state(state.clone(), admin_gate_middleware));

    Router::new()
        .merge(admin)
        .route("/admin/login", get(routes::admin::login))
        .route("/unauthorized", get(routes::public::unauthorized))
        .route("/healthz", get(routes::public::healthz))
        .route("/session", get(routes::public::session))
        .with_state(state)
}
