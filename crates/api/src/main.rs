use std::sync::Arc;

use pawsboard_api::resolver::InMemorySessionResolver;
use pawsboard_auth::SessionResolver;

#[tokio::main]
async fn main() {
    pawsboard_observability::init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    // TODO: swap in the hosted identity-provider resolver once its service
    // credentials are provisioned; until then sessions are process-local.
    let resolver: Arc<dyn SessionResolver> = Arc::new(InMemorySessionResolver::new());

    let app = pawsboard_api::app::build_app(resolver);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {bind_addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
