//! The provider seam: "given a prompt, return text".
//!
//! Each concrete client implements [`TextProvider`]. [`ProviderSet`] maps the
//! closed set of [`ProviderKind`]s to clients and is the only place service
//! names from the store are turned into something callable.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use sus_config::SusConfig;
use sus_core::enums::ProviderKind;

use crate::anthropic::AnthropicClient;
use crate::error::OracleError;
use crate::http::build_client;
use crate::ollama::OllamaClient;
use crate::openai::OpenAiClient;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One earlier message of a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

impl ChatTurn {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A single completion request. `prior_turns` precede `prompt`, which is sent
/// as the final user message.
#[derive(Debug, Clone, Copy)]
pub struct TextRequest<'a> {
    pub prompt: &'a str,
    pub prior_turns: &'a [ChatTurn],
    pub model: &'a str,
    pub max_tokens: u32,
}

impl TextRequest<'_> {
    /// Prior turns followed by the prompt as a user turn.
    #[must_use]
    pub fn conversation(&self) -> Vec<ChatTurn> {
        let mut turns = self.prior_turns.to_vec();
        turns.push(ChatTurn::user(self.prompt));
        turns
    }
}

/// A portrait to describe.
#[derive(Debug, Clone, Copy)]
pub struct ImageInput<'a> {
    pub bytes: &'a [u8],
    /// MIME type, e.g. `image/jpeg`.
    pub media_type: &'a str,
}

/// API credentials for one call.
#[derive(Clone, Default)]
pub struct Credentials {
    pub token: String,
}

impl Credentials {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &if self.token.is_empty() { "<empty>" } else { "<set>" })
            .finish()
    }
}

/// Output of [`TextProvider::describe_image`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescription {
    pub text: String,
    /// Prompt that produced `text`, stored alongside it.
    pub prompt: String,
}

// ---------------------------------------------------------------------------
// TextProvider
// ---------------------------------------------------------------------------

#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Run one chat completion and return the assistant's text.
    async fn generate_text(
        &self,
        request: &TextRequest<'_>,
        credentials: &Credentials,
    ) -> Result<String, OracleError>;

    /// Describe a portrait. Providers without vision support keep the default.
    async fn describe_image(
        &self,
        image: &ImageInput<'_>,
        model: &str,
        max_tokens: u32,
        credentials: &Credentials,
    ) -> Result<ImageDescription, OracleError> {
        let _ = (image, model, max_tokens, credentials);
        Err(OracleError::UnsupportedCapability {
            provider: self.name().to_string(),
            capability: "image description",
        })
    }

    /// Service name used in logs and errors.
    fn name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// ProviderSet
// ---------------------------------------------------------------------------

/// Registered clients keyed by provider kind.
#[derive(Clone, Default)]
pub struct ProviderSet {
    clients: HashMap<ProviderKind, Arc<dyn TextProvider>>,
}

impl ProviderSet {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register `provider` for `kind`, replacing any earlier client.
    #[must_use]
    pub fn with(mut self, kind: ProviderKind, provider: Arc<dyn TextProvider>) -> Self {
        self.clients.insert(kind, provider);
        self
    }

    /// HTTP clients for all four providers, pointed at the configured base URLs.
    #[must_use]
    pub fn from_config(config: &SusConfig) -> Self {
        let http = build_client(config.oracle.request_timeout());
        let urls = &config.providers;
        Self::empty()
            .with(
                ProviderKind::OpenAi,
                Arc::new(OpenAiClient::new(
                    http.clone(),
                    "OpenAI",
                    urls.base_url(ProviderKind::OpenAi),
                    true,
                )),
            )
            .with(
                ProviderKind::DeepSeek,
                Arc::new(OpenAiClient::new(
                    http.clone(),
                    "DeepSeek",
                    urls.base_url(ProviderKind::DeepSeek),
                    false,
                )),
            )
            .with(
                ProviderKind::Anthropic,
                Arc::new(AnthropicClient::new(
                    http.clone(),
                    urls.base_url(ProviderKind::Anthropic),
                )),
            )
            .with(
                ProviderKind::Ollama,
                Arc::new(OllamaClient::new(http, urls.base_url(ProviderKind::Ollama))),
            )
    }

    /// Resolve a stored service name to its kind and client.
    ///
    /// # Errors
    ///
    /// Returns [`OracleError::UnsupportedProvider`] when the name is not one
    /// of the known providers or no client is registered for it.
    pub fn resolve(
        &self,
        service: &str,
    ) -> Result<(ProviderKind, Arc<dyn TextProvider>), OracleError> {
        let kind: ProviderKind = service
            .parse()
            .map_err(|_| OracleError::UnsupportedProvider(service.to_string()))?;
        self.clients
            .get(&kind)
            .map(|client| (kind, Arc::clone(client)))
            .ok_or_else(|| OracleError::UnsupportedProvider(service.to_string()))
    }

    #[must_use]
    pub fn kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|k| self.clients.contains_key(k))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Echo;

    #[async_trait]
    impl TextProvider for Echo {
        async fn generate_text(
            &self,
            request: &TextRequest<'_>,
            _credentials: &Credentials,
        ) -> Result<String, OracleError> {
            Ok(request.prompt.to_string())
        }

        fn name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn resolve_finds_registered_kind() {
        let set = ProviderSet::empty().with(ProviderKind::Ollama, Arc::new(Echo));
        let (kind, client) = set.resolve("Ollama").unwrap();
        assert_eq!(kind, ProviderKind::Ollama);
        assert_eq!(client.name(), "echo");
        assert_eq!(set.kinds(), vec![ProviderKind::Ollama]);
    }

    #[test]
    fn resolve_rejects_unknown_and_unregistered() {
        let set = ProviderSet::empty().with(ProviderKind::Ollama, Arc::new(Echo));
        assert!(matches!(
            set.resolve("Gemini"),
            Err(OracleError::UnsupportedProvider(name)) if name == "Gemini"
        ));
        assert!(matches!(
            set.resolve("OpenAI"),
            Err(OracleError::UnsupportedProvider(_))
        ));
    }

    #[test]
    fn from_config_registers_every_kind() {
        let set = ProviderSet::from_config(&SusConfig::default());
        assert_eq!(set.kinds(), ProviderKind::ALL.to_vec());
    }

    #[tokio::test]
    async fn describe_image_defaults_to_unsupported() {
        let err = Echo
            .describe_image(
                &ImageInput {
                    bytes: b"jpeg",
                    media_type: "image/jpeg",
                },
                "m",
                10,
                &Credentials::default(),
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            OracleError::UnsupportedCapability { provider, .. } if provider == "echo"
        ));
    }

    #[test]
    fn conversation_appends_prompt_last() {
        let prior = [ChatTurn::user("q"), ChatTurn::assistant("r")];
        let req = TextRequest {
            prompt: "final",
            prior_turns: &prior,
            model: "m",
            max_tokens: 5,
        };
        let turns = req.conversation();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[2], ChatTurn::user("final"));
    }

    #[test]
    fn credentials_debug_masks_token() {
        let debug = format!("{:?}", Credentials::new("sk-secret"));
        assert!(!debug.contains("sk-secret"));
    }
}
