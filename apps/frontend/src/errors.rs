use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api_client::TransportError;
use crate::input::ValidationError;

/// Shown for every transport failure, whatever the underlying cause.
pub const TRANSPORT_FAILURE_MESSAGE: &str =
    "Error connecting to the server. Please check if the server is running.";

/// Shown when the collaborator reports `success: false` without a message.
pub const APPLICATION_FAILURE_FALLBACK: &str = "Failed to parse resume.";

/// Outcome of a user action that did not succeed.
///
/// Every failed action ends in exactly one of these, and the renderer matches
/// on them exhaustively.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    #[error("collaborator reported failure: {}", .0.as_deref().unwrap_or("<no message>"))]
    Application(Option<String>),
}

impl ActionError {
    /// The message the user sees for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ActionError::Validation(e) => e.to_string(),
            ActionError::Transport(_) => TRANSPORT_FAILURE_MESSAGE.to_string(),
            ActionError::Application(Some(msg)) if !msg.trim().is_empty() => msg.clone(),
            ActionError::Application(_) => APPLICATION_FAILURE_FALLBACK.to_string(),
        }
    }
}

/// Service-level error type for the front-end's own routes.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::Template(e) => {
                tracing::error!("Template error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "TEMPLATE_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
