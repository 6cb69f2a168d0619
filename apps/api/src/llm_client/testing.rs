//! Scripted `ChatModel` for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Map;

use super::{ChatMessage, ChatModel, ChatResponse, LlmError, Role};

/// One recorded `chat()` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Replies with fixed text (or fails) and records every call.
pub struct StubModel {
    reply: Result<String, String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl StubModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Every call fails with an `LlmError::Api` carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            reply: Err(message.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Content of the single user message of the only call made.
    pub fn only_prompt(&self) -> String {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one model call");
        assert_eq!(calls[0].messages.len(), 1);
        assert_eq!(calls[0].messages[0].role, Role::User);
        calls[0].messages[0].content.clone().unwrap_or_default()
    }
}

#[async_trait]
impl ChatModel for StubModel {
    async fn chat(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<ChatResponse, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            messages: messages.to_vec(),
        });

        match &self.reply {
            Ok(text) => Ok(ChatResponse {
                model: model.to_string(),
                message: ChatMessage {
                    role: Role::Assistant,
                    content: Some(text.clone()),
                    extra: Map::new(),
                },
                extra: Map::new(),
            }),
            Err(message) => Err(LlmError::Api {
                status: 500,
                message: message.clone(),
            }),
        }
    }
}
