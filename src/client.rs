//! Client-side consumer for the relay.
//!
//! Sends one turn to `POST /chat`, reads the classification headers, and
//! decodes the event stream into text deltas delivered over a channel. The
//! session history lives here too: an append-only, timestamped message list
//! that exists only in memory.

use chrono::{DateTime, Utc};
use futures::StreamExt;
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::debug;

use crate::classifier::{EmotionLabel, Locale};
use crate::gateway::{Message, Role};
use crate::relay::{ChatRequest, CRISIS_HEADER, EMOTION_HEADER};
use crate::streaming::{SseDecoder, StreamChunk};

/// Errors surfaced to the caller of [`CompanionClient::send`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The relay answered with a structured error body.
    #[error("relay returned {status}: {message}")]
    Relay { status: StatusCode, message: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Events delivered while a reply streams in.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyEvent {
    /// Next text fragment, in arrival order.
    Delta(String),
    /// Stream finished. Carries the fully accumulated reply; if the
    /// connection dropped early this is whatever arrived before the drop.
    Done { text: String },
}

/// One turn's streaming reply.
#[derive(Debug)]
pub struct Reply {
    /// Emotion the relay detected for the submitted message.
    pub emotion: EmotionLabel,
    /// Crisis flag the relay detected.
    pub crisis: bool,
    events: mpsc::Receiver<ReplyEvent>,
}

impl Reply {
    /// Next event; `None` once the channel is drained after `Done`. Dropping
    /// the reply cancels decoding and releases the connection.
    pub async fn recv(&mut self) -> Option<ReplyEvent> {
        self.events.recv().await
    }

    /// Drain to completion and return the full reply text.
    pub async fn collect(mut self) -> String {
        while let Some(event) = self.recv().await {
            if let ReplyEvent::Done { text } = event {
                return text;
            }
        }
        String::new()
    }
}

/// HTTP client for one relay instance.
pub struct CompanionClient {
    http: reqwest::Client,
    base_url: String,
}

impl CompanionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Send one turn and start decoding the streaming reply.
    ///
    /// `history` must already end with the newest user message;
    /// `user_message` repeats its text for emotion and crisis detection.
    pub async fn send(
        &self,
        history: &[Message],
        user_message: &str,
        locale: Locale,
    ) -> Result<Reply, ClientError> {
        let request = ChatRequest {
            messages: history.to_vec(),
            user_message: user_message.to_string(),
            locale,
        };

        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| "The companion is unavailable right now.".to_string());
            return Err(ClientError::Relay { status, message });
        }

        let emotion = header_str(&response, EMOTION_HEADER)
            .map(EmotionLabel::from_name)
            .unwrap_or(EmotionLabel::Neutral);
        let crisis = header_str(&response, CRISIS_HEADER) == Some("true");

        let (tx, rx) = mpsc::channel(32);
        tokio::spawn(decode_stream(response, tx));

        Ok(Reply {
            emotion,
            crisis,
            events: rx,
        })
    }
}

fn header_str<'a>(response: &'a reqwest::Response, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// Pump the response body through the decoder, forwarding deltas until
/// `[DONE]`, EOF, or the receiver is dropped.
async fn decode_stream(response: reqwest::Response, tx: mpsc::Sender<ReplyEvent>) {
    let mut stream = response.bytes_stream();
    let mut decoder = SseDecoder::new();
    let mut text = String::new();
    let mut done = false;

    while !done {
        let chunk = match stream.next().await {
            Some(Ok(chunk)) => chunk,
            Some(Err(err)) => {
                debug!(error = %err, "reply stream ended early");
                break;
            }
            None => break,
        };

        for frame in decoder.push(&chunk) {
            if frame.is_done() {
                done = true;
                break;
            }
            let Some(parsed) = frame.try_parse::<StreamChunk>() else {
                debug!(frame = %frame.preview(), "skipping undecodable stream record");
                continue;
            };
            if let Some(delta) = parsed.delta_text() {
                text.push_str(delta);
                if tx.send(ReplyEvent::Delta(delta.to_string())).await.is_err() {
                    return;
                }
            }
        }
    }

    let _ = tx.send(ReplyEvent::Done { text }).await;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

// ============================================================================
// Session history
// ============================================================================

/// One message in the session's history.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only conversation history for one session. Nothing is persisted;
/// the list lives and dies with the session.
#[derive(Debug, Default)]
pub struct Session {
    messages: Vec<ChatMessage>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content);
    }

    fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Wire form for a relay request.
    pub fn to_wire(&self) -> Vec<Message> {
        self.messages
            .iter()
            .map(|message| Message {
                role: message.role,
                content: message.content.clone(),
            })
            .collect()
    }
}
