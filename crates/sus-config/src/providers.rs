//! Text-generation provider endpoints and credentials.
//!
//! Tokens set here seed the store's `services` table on startup; a token saved
//! through the store later wins for the running session.

use serde::{Deserialize, Serialize};
use sus_core::enums::ProviderKind;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProviderConfig {
    /// API token. Empty means "not configured here".
    #[serde(default)]
    pub token: String,

    /// Override of the provider's API base URL.
    #[serde(default)]
    pub base_url: String,
}

impl ProviderConfig {
    #[must_use]
    pub const fn has_token(&self) -> bool {
        !self.token.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub anthropic: ProviderConfig,
    #[serde(default)]
    pub deepseek: ProviderConfig,
    #[serde(default)]
    pub ollama: ProviderConfig,
}

impl ProvidersConfig {
    #[must_use]
    pub const fn get(&self, kind: ProviderKind) -> &ProviderConfig {
        match kind {
            ProviderKind::OpenAi => &self.openai,
            ProviderKind::Anthropic => &self.anthropic,
            ProviderKind::DeepSeek => &self.deepseek,
            ProviderKind::Ollama => &self.ollama,
        }
    }

    /// Base URL for `kind`: the configured override or the public default.
    #[must_use]
    pub fn base_url(&self, kind: ProviderKind) -> String {
        let configured = &self.get(kind).base_url;
        if !configured.is_empty() {
            return configured.trim_end_matches('/').to_string();
        }
        match kind {
            ProviderKind::OpenAi => "https://api.openai.com/v1",
            ProviderKind::Anthropic => "https://api.anthropic.com/v1",
            ProviderKind::DeepSeek => "https://api.deepseek.com",
            ProviderKind::Ollama => "http://127.0.0.1:11434",
        }
        .to_string()
    }

    /// Providers with a token set in configuration.
    pub fn configured_tokens(&self) -> impl Iterator<Item = (ProviderKind, &str)> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).has_token())
            .map(|kind| (kind, self.get(kind).token.as_str()))
    }
}
