//! The answer pipeline.
//!
//! For one round: resolve the active model and its provider, load (or
//! generate) the culprit's description, ask the provider for a reflection,
//! then for a bare YES/NO seeded with that reflection. Whatever happens, the
//! round's answer column ends up non-empty: the provider's text verbatim, or
//! `"failed <step>"` naming the step that broke.

use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Notify;
use tokio::task::JoinHandle;

use sus_config::SusConfig;
use sus_core::entities::{Model, Round};
use sus_core::enums::{AnswerState, ProviderKind};
use sus_db::Store;

use crate::error::OracleError;
use crate::prompts;
use crate::provider::{ChatTurn, Credentials, ProviderSet, TextProvider, TextRequest};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Pipeline stage, named in the failure sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Model,
    Provider,
    Service,
    Describe,
    Reflection,
    Answer,
}

impl Step {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Provider => "provider",
            Self::Service => "service",
            Self::Describe => "describe",
            Self::Reflection => "reflection",
            Self::Answer => "answer",
        }
    }
}

struct StepError {
    step: Step,
    source: OracleError,
}

trait AtStep<T> {
    fn at(self, step: Step) -> Result<T, StepError>;
}

impl<T, E: Into<OracleError>> AtStep<T> for Result<T, E> {
    fn at(self, step: Step) -> Result<T, StepError> {
        self.map_err(|e| StepError {
            step,
            source: e.into(),
        })
    }
}

// ---------------------------------------------------------------------------
// AnswerOracle
// ---------------------------------------------------------------------------

/// Token budgets and the portrait location.
#[derive(Debug, Clone)]
pub struct OracleSettings {
    pub portraits_dir: PathBuf,
    pub reflection_max_tokens: u32,
    pub boolean_max_tokens: u32,
    pub description_max_tokens: u32,
}

impl OracleSettings {
    #[must_use]
    pub fn from_config(config: &SusConfig) -> Self {
        Self {
            portraits_dir: PathBuf::from(&config.game.portraits_dir),
            reflection_max_tokens: config.oracle.reflection_max_tokens,
            boolean_max_tokens: config.oracle.boolean_max_tokens,
            description_max_tokens: config.oracle.description_max_tokens,
        }
    }
}

impl Default for OracleSettings {
    fn default() -> Self {
        Self::from_config(&SusConfig::default())
    }
}

/// Generates witness answers in the background and lets callers wait for them.
pub struct AnswerOracle {
    pub(crate) store: Arc<dyn Store>,
    pub(crate) providers: ProviderSet,
    pub(crate) settings: OracleSettings,
    pub(crate) answered: Notify,
}

impl AnswerOracle {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, providers: ProviderSet, settings: OracleSettings) -> Self {
        Self {
            store,
            providers,
            settings,
            answered: Notify::new(),
        }
    }

    /// Oracle with HTTP clients for every provider, configured from `config`.
    #[must_use]
    pub fn from_config(store: Arc<dyn Store>, config: &SusConfig) -> Self {
        Self::new(
            store,
            ProviderSet::from_config(config),
            OracleSettings::from_config(config),
        )
    }

    #[must_use]
    pub const fn settings(&self) -> &OracleSettings {
        &self.settings
    }

    /// Run the pipeline for `round` and persist the outcome.
    ///
    /// Never fails: provider and store errors become a failure sentinel.
    /// Returns the state that was written.
    pub async fn generate_answer(&self, round: &Round, culprit_id: &str) -> AnswerState {
        let state = match self.run(round, culprit_id).await {
            Ok(text) => {
                tracing::info!(round = %round.id, answer = %text, "witness answered");
                AnswerState::Answered(text)
            }
            Err(StepError { step, source }) => {
                tracing::warn!(
                    round = %round.id,
                    culprit = culprit_id,
                    step = step.as_str(),
                    error = %source,
                    "answer pipeline failed"
                );
                AnswerState::failed_step(step.as_str())
            }
        };

        match self.store.save_answer(&round.id, state.as_text()).await {
            Ok(true) => {}
            Ok(false) => tracing::warn!(round = %round.id, "round missing when saving answer"),
            Err(error) => tracing::error!(round = %round.id, %error, "could not save answer"),
        }
        self.answered.notify_waiters();
        state
    }

    /// Start [`generate_answer`](Self::generate_answer) on the runtime.
    ///
    /// Dropping the handle detaches the task; it still runs to completion.
    pub fn spawn_detached(
        self: &Arc<Self>,
        round: Round,
        culprit_id: String,
    ) -> JoinHandle<AnswerState> {
        let oracle = Arc::clone(self);
        tracing::debug!(round = %round.id, "spawning answer task");
        tokio::spawn(async move { oracle.generate_answer(&round, &culprit_id).await })
    }

    async fn run(&self, round: &Round, culprit_id: &str) -> Result<String, StepError> {
        let model = self.store.active_model().await.at(Step::Model)?;
        let (kind, provider) = self.providers.resolve(&model.service).at(Step::Provider)?;
        let credentials = self.credentials(kind).await.at(Step::Service)?;

        let description = self
            .culprit_description(culprit_id, &model, provider.as_ref(), &credentials)
            .await
            .at(Step::Describe)?;

        let reflection_prompt = prompts::reflection(&round.question.english, &description);
        let reflection = provider
            .generate_text(
                &TextRequest {
                    prompt: &reflection_prompt,
                    prior_turns: &[],
                    model: &model.name,
                    max_tokens: self.settings.reflection_max_tokens,
                },
                &credentials,
            )
            .await
            .at(Step::Reflection)?;
        tracing::debug!(round = %round.id, %reflection, "reflection received");

        let prior = [
            ChatTurn::user(reflection_prompt),
            ChatTurn::assistant(reflection),
        ];
        provider
            .generate_text(
                &TextRequest {
                    prompt: prompts::BOOLEAN,
                    prior_turns: &prior,
                    model: &model.name,
                    max_tokens: self.settings.boolean_max_tokens,
                },
                &credentials,
            )
            .await
            .at(Step::Answer)
    }

    /// Stored token for `kind`'s service.
    pub(crate) async fn credentials(&self, kind: ProviderKind) -> Result<Credentials, OracleError> {
        let service = self.store.get_service(kind.as_str()).await?;
        if kind.requires_token() && !service.has_token() {
            return Err(OracleError::MissingToken(service.name));
        }
        Ok(Credentials::new(service.token))
    }

    /// Cached descriptions joined, or a freshly generated one.
    async fn culprit_description(
        &self,
        culprit_id: &str,
        model: &Model,
        provider: &dyn TextProvider,
        credentials: &Credentials,
    ) -> Result<String, OracleError> {
        let cached = self
            .store
            .descriptions_for(culprit_id, &model.service, &model.name)
            .await?;
        if !cached.is_empty() {
            return Ok(cached
                .into_iter()
                .map(|d| d.description)
                .collect::<Vec<_>>()
                .join("\n\n"));
        }
        tracing::info!(
            suspect = culprit_id,
            model = %model.name,
            "no cached description, generating"
        );
        let fresh = self
            .describe_with(culprit_id, &model.service, &model.name, provider, credentials)
            .await?;
        Ok(fresh.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sus_core::rules::FAILURE_STEPS;

    #[test]
    fn every_step_sentinel_reads_back_as_failed() {
        let steps = [
            Step::Model,
            Step::Provider,
            Step::Service,
            Step::Describe,
            Step::Reflection,
            Step::Answer,
        ];
        assert_eq!(steps.len(), FAILURE_STEPS.len());
        for step in steps {
            let state = AnswerState::failed_step(step.as_str());
            assert_eq!(AnswerState::from_answer(state.as_text()), state);
        }
    }
}
