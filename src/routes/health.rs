//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness/readiness probe used by Kubernetes, ECS,
//! systemd, and load balancers to verify the service is alive. It depends on
//! nothing but the process being able to respond to HTTP.

use axum::response::Json;
use serde_json::{json, Value};

use crate::config::SERVICE_NAME;

/// Health check handler.
///
/// Always returns `{"status": "healthy", "service": "interactive-app"}`
/// regardless of request headers or body.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}
