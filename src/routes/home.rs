//! Root page handler.
//!
//! Serves the front-end entry page from disk. A missing or unreadable
//! index.html is a packaging defect; it surfaces as a 500 for that request
//! and is logged, but never crashes the process.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// Serve the main HTML page at the root path.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let contents = tokio::fs::read_to_string(state.config.index_path()).await?;
    Ok(Html(contents))
}
