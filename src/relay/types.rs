//! Wire types for the relay's public endpoint.

use serde::{Deserialize, Serialize};

use crate::classifier::Locale;
use crate::gateway::Message;

/// Body of `POST /chat`.
///
/// `messages` is the full conversation including the newest user message;
/// `userMessage` repeats the newest text and drives classification only.
/// `locale` selects the classifier's keyword locale and defaults to English.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    pub user_message: String,
    #[serde(default)]
    pub locale: Locale,
}
