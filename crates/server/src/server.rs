use axum::{Router, routing::get};

use std::sync::Arc;

use crate::{analytics, service};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Builds the service router. Exposed so integration tests can drive the
/// routes without binding a socket.
pub fn router(state: ServerState) -> Router {
    Router::new()
        .route("/", get(service::root))
        .route("/health", get(service::health))
        .route("/analytics/summary", get(analytics::summary))
        .route("/analytics/categories", get(analytics::categories))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}

pub fn spawn_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) = run_with_listener(engine, listener).await {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}
