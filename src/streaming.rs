//! Decoding for streamed chat replies.
//!
//! The relay passes the upstream completion stream through byte for byte:
//! UTF-8 text, newline-delimited, payload lines prefixed with `data: ` and a
//! final `data: [DONE]` sentinel. Network chunks can split a record anywhere,
//! including inside a multi-byte character, so the decoder buffers raw bytes
//! and only converts complete lines.

use serde::de::DeserializeOwned;
use serde::Deserialize;

// ============================================================================
// Decoder
// ============================================================================

/// Event-stream decoder with carry-over buffering.
///
/// Feed it byte chunks as they arrive; it returns the complete frames found
/// so far and holds any trailing partial line for the next push. The buffer
/// is bounded so a malformed never-ending line cannot grow without limit.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    /// Maximum carry-over size (1MB); beyond this the oldest half is dropped.
    const MAX_BUFFER_SIZE: usize = 1024 * 1024;

    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Push a chunk of bytes and extract the complete frames it finishes.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseFrame> {
        self.buffer.extend_from_slice(chunk);

        if self.buffer.len() > Self::MAX_BUFFER_SIZE {
            tracing::warn!(
                "stream buffer exceeded {}KB without a newline, truncating",
                Self::MAX_BUFFER_SIZE / 1024
            );
            let keep_from = self.buffer.len() - Self::MAX_BUFFER_SIZE / 2;
            self.buffer.drain(..keep_from);
        }

        let mut frames = Vec::new();

        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim();

            if line.is_empty() {
                continue;
            }

            // Payload lines only; comments and other fields fall through.
            if let Some(data) = line.strip_prefix("data: ") {
                frames.push(SseFrame {
                    data: data.to_string(),
                });
            }
        }

        frames
    }

    /// Push a string directly (tests and pre-decoded content).
    pub fn push_str(&mut self, s: &str) -> Vec<SseFrame> {
        self.push(s.as_bytes())
    }

    /// Whether a partial line is being held back.
    pub fn has_remaining(&self) -> bool {
        !self.buffer.is_empty()
    }
}

// ============================================================================
// Frames
// ============================================================================

/// One complete `data: ` payload line, prefix stripped.
#[derive(Debug, Clone)]
pub struct SseFrame {
    pub data: String,
}

impl SseFrame {
    /// The end-of-stream sentinel. Never parse it as JSON.
    pub fn is_done(&self) -> bool {
        self.data == "[DONE]"
    }

    /// Parse the payload, `None` on any malformed or mismatched shape.
    pub fn try_parse<T: DeserializeOwned>(&self) -> Option<T> {
        serde_json::from_str(&self.data).ok()
    }

    /// Short payload preview for log lines. Truncates on a character
    /// boundary so multi-byte payloads cannot split.
    pub fn preview(&self) -> String {
        match self.data.char_indices().nth(200) {
            Some((idx, _)) => format!("{}...", &self.data[..idx]),
            None => self.data.clone(),
        }
    }
}

// ============================================================================
// Completion chunks
// ============================================================================

/// Minimal shape of one streamed completion chunk. Every field is defaulted
/// so shape drift in upstream payloads degrades to "no delta" instead of a
/// decode error.
#[derive(Debug, Default, Deserialize)]
pub struct StreamChunk {
    #[serde(default)]
    pub choices: Vec<StreamChoice>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamChoice {
    #[serde(default)]
    pub delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
pub struct StreamDelta {
    #[serde(default)]
    pub content: Option<String>,
}

impl StreamChunk {
    /// Text delta carried by the first choice. Empty strings count as absent.
    pub fn delta_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|choice| choice.delta.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}
