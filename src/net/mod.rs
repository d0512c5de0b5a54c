//! Network subsystem.
//!
//! Binds the listening socket the HTTP server accepts connections on.

pub mod listener;
