//! Port contracts for the suggestion layer.

pub mod chat;
pub mod provider;

pub use chat::{
    ChatCompletionClient, ChatCompletionError, ChatCompletionResult, ChatMessage, ChatRequest,
    ChatRole,
};
pub use provider::SuggestionProvider;
