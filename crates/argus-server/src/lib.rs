//! HTTP surface for the argus engines.
//!
//! - `GET /` health
//! - `GET /api/scan?address=...` wallet screening
//! - `POST /api/verify-asset` asset verification
//!
//! Status contract for both screening routes: `200` with the verdict body, `400` for
//! invalid input, `503` when an evidence source could not be consulted.

#![forbid(unsafe_code)]

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{HealthResponse, VerifyAssetRequest};

use anyhow::Context;
use argus_app::Engines;
use axum::Router;
use axum::routing::{get, post};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared by every request. Engines hold only read-only snapshots and pooled clients.
pub struct AppState {
    pub engines: Engines,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::health))
        .route("/api/scan", get(routes::scan))
        .route("/api/verify-asset", post(routes::verify_asset))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    let addr = listener.local_addr().context("listener address")?;
    tracing::info!(%addr, "argus server listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .context("serve HTTP")?;
    tracing::info!("argus server stopped");
    Ok(())
}
