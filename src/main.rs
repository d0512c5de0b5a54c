use std::path::PathBuf;

use clap::Parser;

use traffic_sink::config;
use traffic_sink::http::HttpServer;
use traffic_sink::lifecycle::{signals, Shutdown};
use traffic_sink::net::listener;
use traffic_sink::observability::logging;

/// Command-line options for the traffic sink.
#[derive(Parser)]
#[command(name = "traffic-sink")]
#[command(about = "Log every incoming HTTP request and acknowledge with 200", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Listening port; overrides the configured value.
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = config::load_config(&cli.config)?;
    if let Some(port) = cli.port {
        config.listener.port = port;
    }

    logging::init(&config.logging.level);

    tracing::info!("traffic-sink v0.1.0 starting");
    tracing::info!(
        config_path = %cli.config.display(),
        bind_address = %config.listener.bind_address(),
        request_timeout_secs = config.listener.request_timeout_secs,
        "Configuration loaded"
    );

    let listener = listener::bind(&config.listener).await?;

    // Translate SIGINT/SIGTERM into the shutdown broadcast
    let shutdown = Shutdown::new();
    tokio::spawn(signals::listen(shutdown.clone()));

    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
