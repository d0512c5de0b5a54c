//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber
//! - Honor `RUST_LOG` over the configured level
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Per-request traffic records are ordinary info-level events, so any
//!   subscriber layout works for them

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging subsystem.
///
/// The configured level applies to the sink and its HTTP middleware;
/// `RUST_LOG` takes precedence when set.
pub fn init(level: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("traffic_sink={level},tower_http={level}"))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
