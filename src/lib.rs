//! Interactive App: a small HTTP service for deployment exercises.
//!
//! Exposes a health probe, a message echo API, an application info endpoint,
//! and serves the front-end page and its static assets. Handlers are exposed
//! as a library so integration tests can drive the router directly.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
