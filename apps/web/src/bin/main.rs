//! Presentation app entry point.

use std::sync::Arc;

use anyhow::Result;
use recommender::telemetry::init_tracing;
use recommender_web::server::{self, WebState};
use recommender_web::{RecommenderClient, WebSettings};
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing("info");

    let settings = WebSettings::from_env()?;
    let client = RecommenderClient::new(&settings.service_url, settings.upstream_timeout)?;
    tracing::info!(
        service = client.base_url(),
        agent = %settings.agent,
        "relaying analysis requests"
    );

    let bind_addr = settings.bind_addr()?;
    let state = Arc::new(WebState::new(client, settings.agent));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("web app listening on {}", listener.local_addr()?);
    server::serve(listener, state, shutdown_signal()).await?;

    tracing::info!("web app shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
