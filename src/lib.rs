//! HTTP traffic sink.
//!
//! Accepts any common HTTP method on `/`, captures method, headers, and body,
//! writes one log record per request, and acknowledges with a fixed JSON
//! response. Useful as a receiver when observing what a client or forwarder
//! actually sends.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────┐
//!                       │               TRAFFIC SINK                 │
//!                       │                                            │
//!     Client Request    │  ┌─────────┐   ┌─────────┐   ┌─────────┐  │
//!     ──────────────────┼─▶│   net   │──▶│  http   │──▶│ request │  │
//!                       │  │listener │   │ server  │   │ capture │  │
//!                       │  └─────────┘   └─────────┘   └────┬────┘  │
//!                       │                                   │       │
//!                       │                              log record   │
//!                       │                                   │       │
//!     Client Response   │               ┌──────────┐        ▼       │
//!     ◀─────────────────┼───────────────│ response │◀── acknowledge │
//!                       │               │ (200 ok) │                │
//!                       │               └──────────┘                │
//!                       │                                           │
//!                       │  config · observability · lifecycle       │
//!                       └───────────────────────────────────────────┘
//! ```

// Core subsystems
pub mod config;
pub mod http;
pub mod net;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::SinkConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
