//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the traffic handler on `/`
//! - Wire up middleware (tracing, timeout, body size cap)
//! - Serve on a bound listener until shutdown fires
//!
//! # Design Decisions
//! - Every method on `/` is acknowledged with 200; the handler has no
//!   observable failure path
//! - Oversize bodies are rejected by the extractor layer before the handler
//!   runs, the same boundary that rejects malformed framing

use std::time::Duration;

use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::any,
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::SinkConfig;
use crate::http::request::TrafficRecord;
use crate::http::response::Acknowledgement;

/// HTTP server for the traffic sink.
pub struct HttpServer {
    router: Router,
    config: SinkConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SinkConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SinkConfig) -> Router {
        Router::new()
            .route("/", any(traffic_handler))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(DefaultBodyLimit::max(config.listener.max_body_bytes))
            .layer(TraceLayer::new_for_http())
    }

    /// The assembled router, for driving the sink without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Serves until the shutdown channel delivers a value or closes.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SinkConfig {
        &self.config
    }
}

/// Traffic handler.
/// Captures method, headers, and body, logs once, and acknowledges with 200.
async fn traffic_handler(method: Method, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let record = TrafficRecord::capture(&method, &headers, &body);
    record.log();

    (
        StatusCode::OK,
        Json(Acknowledgement::for_method(&record.method)),
    )
}
