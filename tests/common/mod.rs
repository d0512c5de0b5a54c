//! Shared utilities for integration testing.

use tokio::net::TcpListener;

use traffic_sink::config::SinkConfig;
use traffic_sink::http::HttpServer;
use traffic_sink::lifecycle::Shutdown;

/// Start a sink on an ephemeral port.
///
/// Returns the base URL to send requests to and the shutdown handle that
/// stops the spawned server.
pub async fn start_sink() -> (String, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = HttpServer::new(SinkConfig::default());

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (format!("http://{}", addr), shutdown)
}
