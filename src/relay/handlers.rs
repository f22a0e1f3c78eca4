//! HTTP handlers for the chat relay.

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderName, HeaderValue};
use axum::response::{Json, Response};
use serde_json::{json, Value};
use tracing::{error, info};
use uuid::Uuid;

use super::error::RelayError;
use super::types::ChatRequest;
use super::AppState;
use crate::prompt::compose_system_prompt;

/// Response header carrying the detected emotion label.
pub const EMOTION_HEADER: &str = "x-detected-emotion";
/// Response header carrying the crisis flag as `"true"` or `"false"`.
pub const CRISIS_HEADER: &str = "x-crisis-detected";

/// Liveness probe and configuration snapshot.
pub async fn status_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "model": state.model,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// `POST /chat`: classify the newest message, compose the system prompt,
/// forward the turn upstream, and stream the reply back untouched with the
/// classification in response headers.
pub async fn chat_handler(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, RelayError> {
    let turn_id = Uuid::new_v4();

    let classification = state
        .keywords
        .classify(&request.user_message, request.locale);
    info!(
        %turn_id,
        emotion = %classification.emotion,
        crisis = classification.crisis,
        locale = %request.locale,
        history_len = request.messages.len(),
        "relaying chat turn"
    );

    let system_prompt = compose_system_prompt(classification.emotion, classification.crisis);

    let upstream = state
        .gateway
        .chat_stream(&system_prompt, &request.messages)
        .await
        .map_err(|err| {
            error!(%turn_id, error = %err, "gateway call failed");
            RelayError::from(err)
        })?;

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/event-stream"),
    );
    headers.insert(
        HeaderName::from_static(EMOTION_HEADER),
        HeaderValue::from_static(classification.emotion.as_str()),
    );
    headers.insert(
        HeaderName::from_static(CRISIS_HEADER),
        HeaderValue::from_static(if classification.crisis { "true" } else { "false" }),
    );

    Ok(response)
}
