pub mod error;
pub mod openapi;

mod analyze;
mod meta;

pub use error::{ApiError, ApiErrorResponse};
pub use meta::{AgentsResponse, HealthResponse, RootResponse};

use axum::routing::{get, post};
use axum::Router;
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::analysis::AnalysisService;
use crate::config::ServiceSettings;

pub const SERVICE_NAME: &str = "AI Agents Hackathon Recommender API";
pub const SERVICE_VERSION: &str = "1.0.0";

pub struct ServerState {
    pub service: AnalysisService,
    pub settings: ServiceSettings,
}

impl ServerState {
    pub fn new(service: AnalysisService, settings: ServiceSettings) -> Self {
        Self { service, settings }
    }
}

pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/", get(meta::root))
        .route("/health", get(meta::health))
        .route("/agents", get(meta::list_agents))
        .route("/analyze", post(analyze::analyze))
        .route("/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: Arc<ServerState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

/// Background server handle; stops when shut down or dropped.
pub struct Server {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl Server {
    pub async fn start(addr: SocketAddr, state: Arc<ServerState>) -> Result<Self, String> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|error| error.to_string())?;
        let addr = listener
            .local_addr()
            .map_err(|error| error.to_string())?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let result = serve(listener, state, async move {
                let _ = shutdown_rx.await;
            })
            .await;
            if let Err(error) = result {
                tracing::error!("recommender server stopped: {error}");
            }
        });

        Ok(Server {
            addr,
            shutdown: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn shutdown(&mut self) -> Result<(), String> {
        if let Some(sender) = self.shutdown.take() {
            sender
                .send(())
                .map_err(|_| "failed to send server shutdown signal".to_string())
        } else {
            Ok(())
        }
    }
}

impl Drop for Server {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
