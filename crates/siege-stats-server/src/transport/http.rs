//! HTTP transport — axum server exposing the stats endpoint and /health.

use std::sync::Arc;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};

use crate::protocol::StatsHandler;
use crate::types::{HealthResponse, ServerError, ServerResult};

/// HTTP transport for the stats API.
pub struct HttpTransport {
    handler: Arc<StatsHandler>,
}

impl HttpTransport {
    pub fn new(handler: StatsHandler) -> Self {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Build the axum Router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .route("/", get(handle_stats))
            .route("/health", get(handle_health))
            .layer(cors)
            .with_state(self.handler.clone())
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> ServerResult<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;

        tracing::info!("App listening at http://{addr}");

        axum::serve(listener, self.router())
            .await
            .map_err(|e| ServerError::Transport(e.to_string()))?;

        Ok(())
    }
}

async fn handle_stats(State(handler): State<Arc<StatsHandler>>) -> Json<Value> {
    Json(handler.handle_stats().await)
}

/// Health check endpoint — never touches upstream.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
