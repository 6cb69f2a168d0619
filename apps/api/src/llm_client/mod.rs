//! LLM Client — the single point of entry for all chat-completion calls.
//!
//! Handlers never talk to the runtime directly: they receive an
//! `Arc<dyn ChatModel>` through `AppState` and call `chat()` exactly once per request.
//! `OllamaClient` is the production backend; tests swap in a stub.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

pub mod normalize;
pub mod prompts;
#[cfg(test)]
pub mod testing;

/// Model used when a request omits `model`.
pub const DEFAULT_MODEL: &str = "gemma3:4b";

/// Serde default hook for every request's `model` field.
pub fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Displays only the runtime's message; `status` is kept for logging.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

impl LlmError {
    /// HTTP status returned by the runtime, when it answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(err) => err.status().map(|s| s.as_u16()),
            Self::Parse(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// One conversation turn. Fields other than `role` and `content` (images,
/// tool calls) ride along in `extra` so `/api/chat` forwards them verbatim.
/// An absent `content` stays absent on the way out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
            extra: Map::new(),
        }
    }
}

/// A completed chat reply.
///
/// Only `model` and `message` are interpreted; timing and token counters the
/// runtime adds are kept in `extra` so the reply re-serializes unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub model: String,
    pub message: ChatMessage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatResponse {
    /// The generated text; empty when the reply carried no `content`.
    pub fn text(&self) -> &str {
        self.message.content.as_deref().unwrap_or("")
    }
}

/// Text-in/text-out contract every chat backend implements.
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn chat(&self, model: &str, messages: &[ChatMessage])
        -> Result<ChatResponse, LlmError>;

    /// Sends `prompt` as the sole user message.
    async fn prompt(&self, model: &str, prompt: &str) -> Result<ChatResponse, LlmError> {
        let messages = [ChatMessage::user(prompt)];
        self.chat(model, &messages).await
    }
}

#[derive(Debug, Serialize)]
struct OllamaChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct OllamaError {
    error: String,
}

/// Chat backend for an Ollama runtime (`POST {base_url}/api/chat`).
/// One attempt per call; failures surface to the caller as-is.
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.into(),
        })
    }

    fn chat_url(&self) -> String {
        format!("{}/api/chat", self.base_url)
    }
}

#[async_trait]
impl ChatModel for OllamaClient {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatResponse, LlmError> {
        let request_body = OllamaChatRequest {
            model,
            messages,
            stream: false,
        };

        let response = self
            .client
            .post(self.chat_url())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status.as_u16(), body));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)?;

        debug!(
            "Chat call succeeded: model={}, reply_chars={}",
            chat_response.model,
            chat_response.text().len()
        );

        Ok(chat_response)
    }
}

/// Prefers the runtime's `{"error": "..."}` message over the raw body.
fn api_error(status: u16, body: String) -> LlmError {
    let message = serde_json::from_str::<OllamaError>(&body)
        .map(|e| e.error)
        .unwrap_or(body);
    LlmError::Api { status, message }
}
