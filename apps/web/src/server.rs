mod proxy;
mod ui;

pub use proxy::{ProxyRequest, ProxyResponse};

use axum::routing::{get, post};
use axum::{Json, Router};
use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::client::RecommenderClient;

pub struct WebState {
    pub client: RecommenderClient,
    pub agent: String,
}

impl WebState {
    pub fn new(client: RecommenderClient, agent: impl Into<String>) -> Self {
        Self {
            client,
            agent: agent.into(),
        }
    }
}

pub fn router(state: Arc<WebState>) -> Router {
    Router::new()
        .route("/", get(ui::index))
        .route("/health", get(health))
        .route("/api/analyze", post(proxy::analyze))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn serve<F>(listener: TcpListener, state: Arc<WebState>, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

pub struct WebServer {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
}

impl WebServer {
    pub async fn start(addr: SocketAddr, state: Arc<WebState>) -> Result<Self, String> {
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
                tracing::error!("web server stopped: {error}");
            }
        });

        Ok(WebServer {
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

impl Drop for WebServer {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}
