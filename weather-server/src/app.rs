//! Router assembly and the serve loop shared by both deployments.

use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, ApiState};
use crate::pages;

/// The weather app: the JSON API, and the embedded UI for every other path.
///
/// CORS is applied to the API route only; the page does not need it.
pub fn weather_app(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/weather", get(api::current_weather))
        .route("/weather/{*rest}", get(api::current_weather))
        .layer(cors)
        .fallback(pages::weather_page)
        .with_state(state)
}

/// The countdown app: one page, served for every path.
pub fn countdown_app() -> Router {
    Router::new().fallback(pages::countdown_page)
}

/// Bind and serve until ctrl-c or SIGTERM.
pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    log::info!("listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("server shut down gracefully");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        let mut sigterm = tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = ctrl_c => {},
            _ = sigterm.recv() => {},
        }
    }

    #[cfg(not(unix))]
    ctrl_c.await.expect("failed to install Ctrl+C handler");

    log::info!("shutdown signal received");
}
