//! Suggestion provider implementations.
//!
//! - [`OfflineSuggestionProvider`]: deterministic, no external dependency
//! - [`ChatSuggestionProvider`]: language model behind a
//!   [`ChatCompletionClient`](crate::suggestion::ports::ChatCompletionClient)
//! - [`HttpChatCompletionClient`]: OpenAI-compatible HTTP transport

mod chat;
mod http;
mod offline;

pub use chat::{ChatSuggestionProvider, MAX_TASK_SUGGESTIONS, parse_task_list};
pub use http::HttpChatCompletionClient;
pub use offline::OfflineSuggestionProvider;
