//! Ingress HTTP server.
//!
//! Receives "record created" events from the hosting platform and runs the
//! matching trigger before answering, so the caller sees the invocation's
//! full lifetime. Delivery failures never change the response: any matched
//! event is acknowledged with `200 OK`.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::info;
use userhooks_protocol::DatabaseEvent;

use crate::webhook_router::{RouterError, WebhookRouter};

/// Configuration for the ingress server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind
    pub listen_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
        }
    }
}

/// HTTP front end for a [`WebhookRouter`].
pub struct HttpServer {
    config: ServerConfig,
    router: Arc<WebhookRouter>,
}

impl HttpServer {
    pub fn new(config: ServerConfig, router: WebhookRouter) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Axum application serving the ingress routes.
    pub fn app(&self) -> Router {
        create_router(self.router.clone())
    }

    /// Serve until `shutdown` resolves.
    pub async fn run<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(self.config.listen_addr)
            .await
            .with_context(|| format!("Failed to bind {}", self.config.listen_addr))?;

        let local_addr = listener.local_addr()?;
        info!(addr = %local_addr, "Ingress server listening");

        axum::serve(listener, self.app())
            .with_graceful_shutdown(shutdown)
            .await
            .context("Ingress server failed")?;

        info!("Ingress server stopped");
        Ok(())
    }
}

/// Routes: `POST /events` and `GET /health`.
pub fn create_router(router: Arc<WebhookRouter>) -> Router {
    Router::new()
        .route("/events", post(handle_event))
        .route("/health", get(health_check))
        .with_state(router)
}

async fn handle_event(
    State(router): State<Arc<WebhookRouter>>,
    Json(event): Json<DatabaseEvent>,
) -> Response {
    match router.dispatch(event).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "status": "ok" }))).into_response(),
        Err(e @ RouterError::NoMatchingTrigger { .. }) => {
            (StatusCode::NOT_FOUND, Json(json!({ "error": e.to_string() }))).into_response()
        }
    }
}

async fn health_check() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
