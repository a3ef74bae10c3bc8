//! Chat-completion transport port used by the language-model provider.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;

/// Result type for chat-completion calls.
pub type ChatCompletionResult<T> = Result<T, ChatCompletionError>;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    /// Instructions framing the conversation.
    System,
    /// The question being asked.
    User,
}

/// One message of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A single-shot chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Conversation messages in order.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

impl ChatRequest {
    /// Creates a request from a system prompt and a user prompt.
    #[must_use]
    pub fn new(system: impl Into<String>, user: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            messages: vec![ChatMessage::system(system), ChatMessage::user(user)],
            max_tokens,
        }
    }
}

/// Fallible chat-completion transport.
pub trait ChatCompletionClient: Send + Sync {
    /// Sends the request and returns the text of the first choice.
    ///
    /// # Errors
    ///
    /// Returns [`ChatCompletionError`] when the request cannot be sent, the
    /// server answers with a non-success status, or no message comes back.
    fn complete(&self, request: &ChatRequest) -> ChatCompletionResult<String>;
}

/// Errors returned by chat-completion transports.
#[derive(Debug, Clone, Error)]
pub enum ChatCompletionError {
    /// The request could not be sent or the response could not be read.
    #[error("chat completion transport failed: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-success status.
    #[error("chat completion returned HTTP status {0}")]
    Status(u16),

    /// The response held no message content.
    #[error("chat completion response contained no message")]
    EmptyResponse,

    /// A prompt template failed to render.
    #[error("failed to render prompt: {0}")]
    Prompt(String),
}

impl ChatCompletionError {
    /// Wraps a transport error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
