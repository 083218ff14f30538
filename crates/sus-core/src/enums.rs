//! Provider kinds and answer states.
//!
//! Provider names are stored as their display form (`"OpenAI"`, `"Anthropic"`,
//! ...) because that is how services and models reference them in the store.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;
use crate::rules::{FAILURE_PREFIX, FAILURE_STEPS};

// ---------------------------------------------------------------------------
// ProviderKind
// ---------------------------------------------------------------------------

/// The closed set of text-generation providers the oracle can dispatch to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ProviderKind {
    #[serde(rename = "OpenAI")]
    OpenAi,
    #[serde(rename = "Anthropic")]
    Anthropic,
    #[serde(rename = "DeepSeek")]
    DeepSeek,
    #[serde(rename = "Ollama")]
    Ollama,
}

impl ProviderKind {
    pub const ALL: [Self; 4] = [Self::OpenAi, Self::Anthropic, Self::DeepSeek, Self::Ollama];

    /// Service name as stored in the `services` and `models` tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OpenAi => "OpenAI",
            Self::Anthropic => "Anthropic",
            Self::DeepSeek => "DeepSeek",
            Self::Ollama => "Ollama",
        }
    }

    /// Whether calls to this provider need an API token.
    #[must_use]
    pub const fn requires_token(self) -> bool {
        !matches!(self, Self::Ollama)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match on the service name.
impl FromStr for ProviderKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| CoreError::UnsupportedProvider(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// AnswerState
// ---------------------------------------------------------------------------

/// Lifecycle of a round's answer.
///
/// ```text
/// pending → answered
///         → failed
/// ```
///
/// Both terminal states are final; the oracle never retries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "state", content = "text")]
pub enum AnswerState {
    Pending,
    Answered(String),
    Failed(String),
}

impl AnswerState {
    /// Classify the raw answer column of a round.
    ///
    /// Only an exact `"failed <step>"` sentinel counts as a failure; witness
    /// text that merely starts with "failed" is an answer.
    #[must_use]
    pub fn from_answer(answer: &str) -> Self {
        let sentinel = answer
            .strip_prefix(FAILURE_PREFIX)
            .is_some_and(|step| FAILURE_STEPS.contains(&step));
        if answer.is_empty() {
            Self::Pending
        } else if sentinel {
            Self::Failed(answer.to_string())
        } else {
            Self::Answered(answer.to_string())
        }
    }

    /// Build the sentinel for a failed pipeline step, e.g. `"failed describe"`.
    #[must_use]
    pub fn failed_step(step: &str) -> Self {
        Self::Failed(format!("{FAILURE_PREFIX}{step}"))
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }

    /// Text persisted in the round's answer column.
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Pending => "",
            Self::Answered(text) | Self::Failed(text) => text,
        }
    }
}
