//! Recommendation service entry point.

use std::sync::Arc;

use anyhow::Result;
use recommender::config::{AgentRegistry, ServiceSettings};
use recommender::generator::build_generator;
use recommender::server::{self, ServerState};
use recommender::telemetry::init_tracing;
use recommender::AnalysisService;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_tracing("info");

    let settings = ServiceSettings::from_env()?;
    let registry = AgentRegistry::load_or_builtin(&settings.agents_path);
    tracing::info!(
        agents = ?registry.names(),
        gateway = %settings.gateway_url,
        generator = ?settings.generator,
        "agent service configured"
    );

    let service = AnalysisService::new(registry, build_generator(settings.generator));
    let bind_addr = settings.bind_addr()?;
    let state = Arc::new(ServerState::new(service, settings));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("recommender listening on {}", listener.local_addr()?);
    server::serve(listener, state, shutdown_signal()).await?;

    tracing::info!("recommender shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        tracing::error!("failed to listen for ctrl-c: {error}");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
