//! Relay failure taxonomy and its HTTP mapping.
//!
//! Callers always receive a short, warm message and a status code; the
//! underlying cause stays in the server log and is never serialized into the
//! response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;

use crate::gateway::GatewayError;

/// Failure kinds surfaced by `POST /chat`.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Upstream 429. The caller may resubmit; the relay never retries.
    #[error("upstream rate limited")]
    RateLimited,

    /// Upstream 402.
    #[error("upstream quota exhausted")]
    QuotaExceeded,

    /// Upstream answered with any other non-success status. The detail is
    /// for the log only.
    #[error("upstream failure: {detail}")]
    Upstream { detail: String },

    /// No upstream answer at all: transport failure, timeout, missing
    /// credential, or anything else unexpected before a response arrived.
    #[error("internal error: {detail}")]
    Internal { detail: String },
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            RelayError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            RelayError::Upstream { .. } | RelayError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message shown to the user in place of a reply.
    pub fn user_message(&self) -> &'static str {
        match self {
            RelayError::RateLimited => {
                "I'm taking a moment to rest. Please try again in a few seconds 💛"
            }
            RelayError::QuotaExceeded => {
                "Service temporarily unavailable. Please try again later."
            }
            RelayError::Upstream { .. } => {
                "I'm having trouble connecting right now. Please try again."
            }
            RelayError::Internal { .. } => {
                "Something went wrong. I'm here for you - please try again."
            }
        }
    }
}

impl From<GatewayError> for RelayError {
    fn from(err: GatewayError) -> Self {
        match err {
            GatewayError::RateLimited => RelayError::RateLimited,
            GatewayError::QuotaExceeded => RelayError::QuotaExceeded,
            GatewayError::UpstreamStatus { .. } => RelayError::Upstream {
                detail: err.to_string(),
            },
            other => RelayError::Internal {
                detail: other.to_string(),
            },
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "error": self.user_message() }));
        (status, body).into_response()
    }
}
