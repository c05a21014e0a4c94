//! JSON API handlers: message submission and application info.
//!
//! Request and response bodies are explicit serde types; validation runs
//! before any handler logic. Both operations are stateless transforms of the
//! request, so repeated identical calls produce identical output.

use axum::{extract::State, response::Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::{AppConfig, API_ENDPOINTS, APP_NAME};
use crate::error::AppError;
use crate::state::AppState;

/// Inbound message submission body.
///
/// The message must be non-empty after trimming surrounding whitespace;
/// this is checked before the echo transform runs.
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

impl MessageRequest {
    /// Validation check used by the submit handler.
    pub fn is_empty(&self) -> bool {
        self.message.trim().is_empty()
    }
}

/// Outbound message submission body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub response: String,
    pub status: String,
}

impl MessageResponse {
    /// Build the success response for a received message. The echoed text
    /// preserves the original, untrimmed input.
    pub fn received(message: &str) -> Self {
        Self {
            response: format!("Received: {message}"),
            status: "success".to_string(),
        }
    }
}

/// Application info body returned by `/api/info`.
#[derive(Debug, Serialize)]
pub struct AppInfo {
    pub app: &'static str,
    pub version: &'static str,
    pub environment: String,
    pub endpoints: [&'static str; 3],
}

/// Accept a message and return a formatted echo response.
///
/// Returns 400 with a descriptive reason when the message is empty or
/// whitespace-only; no side effects occur in that case.
#[instrument(name = "api::submit", skip(payload))]
pub async fn submit(
    Json(payload): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.is_empty() {
        return Err(AppError::EmptyMessage);
    }

    Ok(Json(MessageResponse::received(&payload.message)))
}

/// Return application identity, version, deployment environment, and the
/// enumerated API paths. The environment value was resolved at startup.
#[instrument(name = "api::info", skip(state))]
pub async fn info(State(state): State<AppState>) -> Json<AppInfo> {
    Json(AppInfo {
        app: APP_NAME,
        version: AppConfig::version(),
        environment: state.config.environment.clone(),
        endpoints: API_ENDPOINTS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_message_is_empty() {
        let request = MessageRequest {
            message: "   \t\n".to_string(),
        };
        assert!(request.is_empty());
    }

    #[test]
    fn message_with_surrounding_whitespace_is_not_empty() {
        let request = MessageRequest {
            message: "  hello  ".to_string(),
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn echo_preserves_untrimmed_input() {
        let response = MessageResponse::received("  hello  ");
        assert_eq!(response.response, "Received:   hello  ");
        assert_eq!(response.status, "success");
    }
}
