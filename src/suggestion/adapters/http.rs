//! OpenAI-compatible chat-completion client over blocking HTTP.

use crate::suggestion::ports::{
    ChatCompletionClient, ChatCompletionError, ChatCompletionResult, ChatMessage, ChatRequest,
};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

const USER_AGENT: &str = concat!("wallestars/", env!("CARGO_PKG_VERSION"));

/// Chat-completion transport that posts to `{base_url}/chat/completions`.
#[derive(Clone)]
pub struct HttpChatCompletionClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

impl HttpChatCompletionClient {
    /// Builds a client for the given endpoint root, credential and model.
    ///
    /// # Errors
    ///
    /// Returns [`ChatCompletionError::Transport`] when the HTTP client cannot
    /// be constructed.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> ChatCompletionResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(ChatCompletionError::transport)?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", base_url.trim_end_matches('/')),
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Returns the full chat-completion URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the model requested on every call.
    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }
}

impl fmt::Debug for HttpChatCompletionClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpChatCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl ChatCompletionClient for HttpChatCompletionClient {
    fn complete(&self, request: &ChatRequest) -> ChatCompletionResult<String> {
        let body = CompletionBody {
            model: &self.model,
            messages: &request.messages,
            max_tokens: request.max_tokens,
        };
        debug!(endpoint = %self.endpoint, model = %self.model, "sending chat completion");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(ChatCompletionError::transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ChatCompletionError::Status(status.as_u16()));
        }

        let parsed: CompletionResponse = response.json().map_err(ChatCompletionError::transport)?;
        first_message(parsed)
    }
}

fn first_message(response: CompletionResponse) -> ChatCompletionResult<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ChatCompletionError::EmptyResponse)
}
