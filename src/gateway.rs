//! Upstream chat-completion gateway client.
//!
//! One POST per turn: the composed system prompt plus the caller's history,
//! `stream: true`, bearer auth. On success the response is handed back with
//! its body untouched so the relay can pass the stream through.

use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ElaraConfig;

/// Upstream failures, normalized for the relay's failure policy.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway rate limited the request")]
    RateLimited,

    #[error("gateway quota exhausted")]
    QuotaExceeded,

    #[error("no gateway credential configured")]
    MissingCredential,

    #[error("gateway returned {status}: {detail}")]
    UpstreamStatus { status: StatusCode, detail: String },

    #[error("gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid gateway url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub struct GatewayClient {
    http: reqwest::Client,
    endpoint: Url,
    api_key: Option<String>,
    model: String,
}

impl GatewayClient {
    /// Build a client from configuration. Fails only on an unparsable base
    /// URL; a missing credential is surfaced per request instead, so the
    /// server can still boot and answer status probes.
    pub fn from_config(config: &ElaraConfig) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(&format!(
            "{}/chat/completions",
            config.gateway_url.trim_end_matches('/')
        ))?;

        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .read_timeout(Duration::from_secs(config.read_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }

    /// Resolved completion endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// POST one turn upstream and return the streaming response.
    ///
    /// `history` must already end with the newest user message; the system
    /// prompt is prepended here and nothing else is added. Non-success
    /// statuses are normalized into [`GatewayError`]; the failure body is
    /// read only so the caller can log it.
    pub async fn chat_stream(
        &self,
        system_prompt: &str,
        history: &[Message],
    ) -> Result<reqwest::Response, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingCredential)?;

        let mut messages = Vec::with_capacity(history.len() + 1);
        messages.push(Message {
            role: Role::System,
            content: system_prompt.to_string(),
        });
        messages.extend_from_slice(history);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            stream: true,
        };

        let response = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => Ok(response),
            StatusCode::TOO_MANY_REQUESTS => Err(GatewayError::RateLimited),
            StatusCode::PAYMENT_REQUIRED => Err(GatewayError::QuotaExceeded),
            status => {
                let detail = response.text().await.unwrap_or_default();
                Err(GatewayError::UpstreamStatus { status, detail })
            }
        }
    }
}

// ============================================================================
// Wire types
// ============================================================================

/// Message role on the chat-completion wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One conversation message as sent to the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<Message>,
    stream: bool,
}
