//! Observability subsystem.
//!
//! One concern here: structured logging. Each captured request becomes a
//! single log event carrying method, headers, and body; the subscriber is
//! configured once at startup.

pub mod logging;
