//! HTTP server module.
//!
//! Provides listener startup, graceful shutdown on SIGTERM/SIGINT, and the
//! static file service for front-end assets. TLS termination is left to the
//! deployment environment.

mod server;
mod shutdown;
pub mod static_files;

pub use server::start_server;
