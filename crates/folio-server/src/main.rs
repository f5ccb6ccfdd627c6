use std::net::SocketAddr;

use anyhow::Context;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use folio_api::state::{ApiConfig, AppStateInner, OrphanContactPolicy};

/// 1 MiB is plenty for a portfolio with a few dozen projects.
const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_server=debug,folio_api=debug,folio_db=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let host = std::env::var("FOLIO_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("FOLIO_PORT")
        .unwrap_or_else(|_| "5000".into())
        .parse()
        .context("FOLIO_PORT must be a port number")?;
    let orphan_contacts: OrphanContactPolicy = std::env::var("FOLIO_ORPHAN_CONTACTS")
        .unwrap_or_else(|_| "reject".into())
        .parse()?;
    let max_body_bytes: usize = match std::env::var("FOLIO_MAX_BODY_BYTES") {
        Ok(v) => v.parse().context("FOLIO_MAX_BODY_BYTES must be a byte count")?,
        Err(_) => DEFAULT_MAX_BODY_BYTES,
    };

    let state = AppStateInner::new(ApiConfig { orphan_contacts });

    let app = folio_api::router(state)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Folio server listening on {}", addr);
    info!("Orphan contact messages: {:?}", orphan_contacts);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(sigterm) => sigterm,
                Err(e) => {
                    tracing::warn!("Failed to install SIGTERM handler: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
