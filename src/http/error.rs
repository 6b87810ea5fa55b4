//! Error taxonomy and HTTP response mapping.
//!
//! Every variant converts to a structured JSON response locally; nothing
//! here propagates as a process-level failure.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures surfaced by the contact endpoint.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("rate limit exceeded")]
    RateLimited,

    #[error("payload too large")]
    PayloadTooLarge,

    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("validation failed")]
    ValidationFailed(Vec<String>),

    /// Honeypot tripped. Rendered identically to a generic invalid
    /// request so automated clients get no useful signal.
    #[error("honeypot field was filled")]
    SpamSuspected,

    #[error("inquiry store failure: {0}")]
    Store(#[from] std::io::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::RateLimited => (
                StatusCode::TOO_MANY_REQUESTS,
                json!({ "ok": false, "error": "Too many requests. Please try again later." }),
            ),
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                json!({ "ok": false, "error": "Payload too large" }),
            ),
            Self::InvalidBody(message) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": message }),
            ),
            Self::ValidationFailed(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": "Validation failed.", "details": details }),
            ),
            Self::SpamSuspected => (
                StatusCode::BAD_REQUEST,
                json!({ "ok": false, "error": "Invalid request." }),
            ),
            Self::Store(e) => {
                tracing::error!(error = %e, "Failed to persist inquiry");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "ok": false, "error": "Internal error." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
