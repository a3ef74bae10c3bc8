//! Suggestion provider configuration and one-time provider selection.

use crate::suggestion::adapters::{
    ChatSuggestionProvider, HttpChatCompletionClient, OfflineSuggestionProvider,
};
use crate::suggestion::ports::SuggestionProvider;
use std::time::Duration;
use tracing::{info, warn};

/// Environment variable holding the language-model credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "WALLESTARS_OPENAI_MODEL";
/// Environment variable overriding the API root URL.
pub const BASE_URL_VAR: &str = "WALLESTARS_OPENAI_BASE_URL";
/// Environment variable overriding the request timeout in seconds.
pub const TIMEOUT_VAR: &str = "WALLESTARS_OPENAI_TIMEOUT_SECS";

/// Model requested when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for the suggestion layer.
///
/// # Examples
///
/// ```
/// use wallestars::suggestion::config::SuggestionConfig;
///
/// let config = SuggestionConfig::default();
/// assert!(config.api_key.is_none());
/// assert!(!config.build_provider().available());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Language-model credential; `None` selects the offline provider.
    pub api_key: Option<String>,
    /// Model name sent with every request.
    pub model: String,
    /// API root URL, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl std::fmt::Debug for SuggestionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SuggestionConfig {
    /// Reads settings from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through an arbitrary variable lookup.
    ///
    /// Blank values count as unset. An unparsable timeout keeps the default.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let timeout = read(TIMEOUT_VAR).map_or(defaults.timeout, |raw| {
            raw.parse::<u64>().map(Duration::from_secs).unwrap_or_else(|err| {
                warn!(variable = TIMEOUT_VAR, value = %raw, error = %err, "ignoring invalid timeout");
                defaults.timeout
            })
        });

        Self {
            api_key: read(API_KEY_VAR),
            model: read(MODEL_VAR).unwrap_or(defaults.model),
            base_url: read(BASE_URL_VAR).unwrap_or(defaults.base_url),
            timeout,
        }
    }

    /// Returns a copy with the credential removed, forcing offline mode.
    #[must_use]
    pub fn offline(mut self) -> Self {
        self.api_key = None;
        self
    }

    /// Selects the provider once from these settings.
    ///
    /// A credential selects the language-model provider; no credential, or an
    /// HTTP client that cannot be built, selects the offline provider.
    #[must_use]
    pub fn build_provider(&self) -> Box<dyn SuggestionProvider> {
        let Some(api_key) = self.api_key.as_deref() else {
            info!("no language-model credential configured; using offline suggestions");
            return Box::new(OfflineSuggestionProvider::new());
        };

        match HttpChatCompletionClient::new(&self.base_url, api_key, &self.model, self.timeout) {
            Ok(client) => {
                info!(model = %self.model, "using language-model suggestions");
                Box::new(ChatSuggestionProvider::new(client))
            }
            Err(err) => {
                warn!(error = %err, "language-model client unavailable; using offline suggestions");
                Box::new(OfflineSuggestionProvider::new())
            }
        }
    }
}
