//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (capture method/headers, classify body, log)
//!     → response.rs (fixed acknowledgement)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{BodyRepr, TrafficRecord};
pub use response::Acknowledgement;
pub use server::HttpServer;
