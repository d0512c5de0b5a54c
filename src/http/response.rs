//! Acknowledgement response.
//!
//! # Responsibilities
//! - Define the fixed success shape returned for every captured request
//!
//! # Design Decisions
//! - Always HTTP 200; no error variant exists for the client to observe
//! - The message interpolates the method exactly as received

use serde::Serialize;

/// Fixed-shape acknowledgement returned for every request on `/`.
#[derive(Debug, Clone, Serialize)]
pub struct Acknowledgement {
    pub status: &'static str,
    pub message: String,
}

impl Acknowledgement {
    /// Build the acknowledgement for a request method.
    pub fn for_method(method: &str) -> Self {
        Self {
            status: "success",
            message: format!("Received {} request", method),
        }
    }
}
