use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::gateway::ProviderError;

/// Caller-facing message for faults the caller can do nothing about.
/// Detail stays in the server-side logs.
const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate mind map";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Internal error: {0}")]
    Unexpected(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::NotConfigured(msg) => AppError::Configuration(msg),
            ProviderError::Upstream { status, message } => AppError::Upstream { status, message },
            ProviderError::Network(msg) => {
                AppError::Unexpected(anyhow::anyhow!("network error: {}", msg))
            }
            ProviderError::InvalidResponse(msg) => {
                AppError::Unexpected(anyhow::anyhow!("invalid upstream response: {}", msg))
            }
        }
    }
}

/// Map an upstream status to the status we answer with: 4xx/5xx pass
/// through, anything else (a 3xx, or a value that is not a status code at
/// all) becomes 502.
fn passthrough_status(status: u16) -> StatusCode {
    match StatusCode::from_u16(status) {
        Ok(code) if code.is_client_error() || code.is_server_error() => code,
        _ => StatusCode::BAD_GATEWAY,
    }
}

/// First field-level message out of a validator error set. The request DTOs
/// attach the caller-facing message to each rule, so this is the envelope
/// text.
fn first_validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field| field.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| errors.to_string())
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        #[derive(Serialize)]
        struct ErrorResponse {
            error: String,
        }

        let (status, error_message) = match self {
            AppError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, first_validation_message(&errors))
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Configuration(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Upstream { status, message } => (
                passthrough_status(status),
                format!("Groq API error: {}", message),
            ),
            AppError::Unexpected(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
        };

        (
            status,
            Json(ErrorResponse {
                error: error_message,
            }),
        )
            .into_response()
    }
}
