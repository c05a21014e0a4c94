//! HTTP route handlers for the service.
//!
//! Routes are organized by content type, with per-route Cache-Control
//! headers. Static assets get a long immutable cache; the health probe and
//! API responses are never cached.
//!
//! Request tracing is enabled via middleware that generates a unique request
//! ID for each incoming request, allowing correlation of all logs within a
//! request.

pub mod api;
pub mod health;
pub mod home;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use ::http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_NO_STORE, CACHE_CONTROL_STATIC};
use crate::http::static_files::create_static_service;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // JSON API - never cached, responses depend on request bodies
    let api_routes = Router::new()
        .route("/api/submit", post(api::submit))
        .route("/api/info", get(api::info))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new()
        .route("/healthz", get(health::health))
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ));

    // Root page - served from disk on every request
    let home_routes = Router::new().route("/", get(home::index));

    // Static files - long cache with immutable hint
    let static_routes = Router::new()
        .nest_service(
            "/static",
            create_static_service(&state.config.frontend_dir),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_STATIC),
        ));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .merge(home_routes)
        .merge(static_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
