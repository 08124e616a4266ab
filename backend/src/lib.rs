//! Mock Chat Backend Library
//!
//! Canned-response HTTP server used to exercise the chat client without a
//! real agent service. The binary lives in `src/main.rs`; the router is
//! exposed here so tests can serve it on an ephemeral port.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod router;

pub use config::{Config, MockConfig};
pub use router::{build_router, serve};
