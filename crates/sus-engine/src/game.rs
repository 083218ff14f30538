//! The caller-facing game facade.
//!
//! [`GameEngine`] is what a front-end talks to. It owns one engine per
//! concern and wires them to a shared store and oracle:
//!
//! ```text
//! GameEngine ─┬─ InvestigationEngine ── RoundEngine ── AnswerOracle (background)
//!             ├─ EliminationLedger ──── ScoreEngine
//!             ├─ QuestionBank / SuspectPool (seeding)
//!             └─ Store (services, models, stats)
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use sus_config::SusConfig;
use sus_core::entities::{
    ConflictingQuestion, ConflictingSuspect, Description, FinalScore, Game, GameState, Model,
    Service,
};
use sus_core::ids::PREFIX_GAME;
use sus_db::Store;
use sus_oracle::{AnswerOracle, DescribeReport, WaitOutcome};

use crate::elimination::{EliminationLedger, EliminationOutcome};
use crate::error::{GameError, or_not_found};
use crate::investigation::InvestigationEngine;
use crate::question_bank::QuestionBank;
use crate::score::{ScoreEngine, is_game_over};
use crate::suspect_pool::SuspectPool;

/// Settings the facade applies on behalf of callers.
#[derive(Debug, Clone)]
pub struct GameSettings {
    pub default_investigator: String,
    pub portraits_dir: PathBuf,
    pub poll_interval: Duration,
    pub wait_timeout: Duration,
}

impl GameSettings {
    #[must_use]
    pub fn from_config(config: &SusConfig) -> Self {
        Self {
            default_investigator: config.game.default_investigator.clone(),
            portraits_dir: PathBuf::from(&config.game.portraits_dir),
            poll_interval: config.oracle.poll_interval(),
            wait_timeout: config.oracle.timeout(),
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self::from_config(&SusConfig::default())
    }
}

#[derive(Clone)]
pub struct GameEngine {
    store: Arc<dyn Store>,
    oracle: Arc<AnswerOracle>,
    settings: GameSettings,
    investigations: InvestigationEngine,
    ledger: EliminationLedger,
    scores: ScoreEngine,
}

impl GameEngine {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, oracle: Arc<AnswerOracle>, settings: GameSettings) -> Self {
        Self {
            investigations: InvestigationEngine::new(Arc::clone(&store), Arc::clone(&oracle)),
            ledger: EliminationLedger::new(Arc::clone(&store)),
            scores: ScoreEngine::new(Arc::clone(&store)),
            store,
            oracle,
            settings,
        }
    }

    /// Engine with HTTP provider clients, configured from `config`.
    #[must_use]
    pub fn from_config(store: Arc<dyn Store>, config: &SusConfig) -> Self {
        let oracle = Arc::new(AnswerOracle::from_config(Arc::clone(&store), config));
        Self::new(store, oracle, GameSettings::from_config(config))
    }

    #[must_use]
    pub const fn settings(&self) -> &GameSettings {
        &self.settings
    }

    #[must_use]
    pub const fn oracle(&self) -> &Arc<AnswerOracle> {
        &self.oracle
    }

    // -- lifecycle ----------------------------------------------------------

    /// Start a game with score 0 and its first investigation.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the game or its first investigation cannot be
    /// created.
    pub async fn new_game(&self) -> Result<GameState, GameError> {
        let game = Game {
            id: self.store.next_id(PREFIX_GAME).await?,
            created_at: Utc::now(),
            score: 0,
            investigator: self.settings.default_investigator.clone(),
        };
        self.store.insert_game(&game).await?;
        tracing::info!(game = %game.id, "new game");

        let investigation = self.investigations.new_investigation(&game.id).await?;
        Ok(GameState {
            game,
            investigation,
            level: 1,
            game_over: false,
        })
    }

    /// The most recent game, or a fresh one when none exists.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] on store failure or when a needed investigation
    /// cannot be created.
    pub async fn current_game(&self) -> Result<GameState, GameError> {
        match self.store.latest_game().await? {
            Some(game) => self.game_state(game).await,
            None => self.new_game().await,
        }
    }

    /// Attach a fresh investigation to the current game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the current game cannot be loaded or the
    /// investigation cannot be created.
    pub async fn next_investigation(&self) -> Result<GameState, GameError> {
        let current = self.current_game().await?;
        self.investigations
            .new_investigation(&current.game.id)
            .await?;
        let game = self.store.get_game(&current.game.id).await?;
        self.game_state(game).await
    }

    /// Open a new round in the current investigation. The returned state
    /// includes the round, still waiting for its answer.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] if the current game cannot be loaded or the
    /// round cannot be created.
    pub async fn next_round(&self) -> Result<GameState, GameError> {
        let mut state = self.current_game().await?;
        let round = self
            .investigations
            .rounds()
            .new_round(&state.investigation.id)
            .await?;
        state.investigation.rounds.push(round);
        Ok(state)
    }

    /// Wait for a round's answer with the configured interval and timeout.
    pub async fn wait_for_answer(&self, round_id: &str) -> WaitOutcome {
        self.wait_for_answer_with(
            round_id,
            self.settings.poll_interval,
            self.settings.wait_timeout,
        )
        .await
    }

    pub async fn wait_for_answer_with(
        &self,
        round_id: &str,
        poll_interval: Duration,
        timeout: Duration,
    ) -> WaitOutcome {
        self.oracle
            .wait_for_answer(round_id, poll_interval, timeout)
            .await
    }

    /// Release a suspect in a round and score it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError`] when the investigation, round, or suspect is
    /// unknown or a write fails.
    pub async fn eliminate_suspect(
        &self,
        suspect_id: &str,
        round_id: &str,
        investigation_id: &str,
    ) -> Result<EliminationOutcome, GameError> {
        self.ledger
            .save_elimination(suspect_id, round_id, investigation_id)
            .await
    }

    /// Sign a game with the investigator's name. Not validated.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown game.
    pub async fn set_investigator_name(&self, name: &str, game_id: &str) -> Result<(), GameError> {
        self.store
            .set_investigator(game_id, name)
            .await
            .map_err(|e| or_not_found(e, "game", game_id))?;
        tracing::info!(game = game_id, investigator = name, "score saved");
        Ok(())
    }

    /// Alias of [`set_investigator_name`](Self::set_investigator_name).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown game.
    pub async fn save_score(&self, name: &str, game_id: &str) -> Result<(), GameError> {
        self.set_investigator_name(name, game_id).await
    }

    /// All games, highest score first.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the query fails.
    pub async fn scores(&self) -> Result<Vec<FinalScore>, GameError> {
        Ok(self.store.list_scores().await?)
    }

    async fn game_state(&self, game: Game) -> Result<GameState, GameError> {
        let investigation = match self.investigations.current_investigation(&game.id).await {
            Ok(investigation) => investigation,
            Err(GameError::NotFound {
                entity: "investigation",
                ..
            }) => {
                tracing::warn!(game = %game.id, "game has no investigation, opening one");
                self.investigations.new_investigation(&game.id).await?
            }
            Err(e) => return Err(e),
        };
        let level = self.scores.level(&game.id).await?;
        let game_over = is_game_over(&investigation);
        Ok(GameState {
            game,
            investigation,
            level,
            game_over,
        })
    }

    // -- seeding ------------------------------------------------------------

    /// Store the built-in questions. Returns how many were new.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if an insert fails.
    pub async fn seed_questions(&self) -> Result<usize, GameError> {
        QuestionBank::new(Arc::clone(&self.store))
            .seed_defaults()
            .await
    }

    /// Register portraits from `dir`, or the configured portraits directory.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Portraits`] if the directory cannot be read, or a
    /// store error.
    pub async fn seed_suspects(&self, dir: Option<&Path>) -> Result<usize, GameError> {
        let dir = dir.unwrap_or(self.settings.portraits_dir.as_path());
        SuspectPool::new(Arc::clone(&self.store))
            .seed_from_dir(dir)
            .await
    }

    /// Number of registered suspects.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the count fails.
    pub async fn suspect_count(&self) -> Result<usize, GameError> {
        let count = self.store.count_suspects().await?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    // -- services and models ------------------------------------------------

    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the query fails.
    pub async fn list_services(&self) -> Result<Vec<Service>, GameError> {
        Ok(self.store.list_services().await?)
    }

    /// Store the API token for `service`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown service.
    pub async fn save_token(&self, service: &str, token: &str) -> Result<(), GameError> {
        self.store
            .save_token(service, token)
            .await
            .map_err(|e| or_not_found(e, "service", service))?;
        tracing::info!(service, "token saved");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the query fails.
    pub async fn list_models(&self) -> Result<Vec<Model>, GameError> {
        Ok(self.store.list_models().await?)
    }

    /// Register a model under an existing service. Returns `false` if it was
    /// already known.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] when the service does not exist.
    pub async fn add_model(&self, name: &str, service: &str) -> Result<bool, GameError> {
        Ok(self.store.add_model(name, service).await?)
    }

    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] when no model is active.
    pub async fn active_model(&self) -> Result<Model, GameError> {
        self.store
            .active_model()
            .await
            .map_err(|e| or_not_found(e, "active model", ""))
    }

    /// Make `name` the only active model.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown model; the previous
    /// choice stays active.
    pub async fn set_active_model(&self, name: &str) -> Result<Model, GameError> {
        self.store
            .set_active_model(name)
            .await
            .map_err(|e| or_not_found(e, "model", name))?;
        tracing::info!(model = name, "active model switched");
        self.active_model().await
    }

    // -- descriptions -------------------------------------------------------

    /// Describe one suspect's portrait and cache it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnsupportedProvider`] for an unknown service,
    /// [`GameError::ProviderCall`] when the provider or portrait fails.
    pub async fn generate_description(
        &self,
        suspect_id: &str,
        service: &str,
        model: &str,
    ) -> Result<Description, GameError> {
        Ok(self
            .oracle
            .generate_description(suspect_id, service, model)
            .await?)
    }

    /// Describe every suspect with fewer than `limit` cached descriptions for
    /// the pair. Individual failures are collected in the report.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the suspect query fails.
    pub async fn generate_descriptions_for_all(
        &self,
        limit: i64,
        service: &str,
        model: &str,
        on_progress: impl FnMut(usize, usize),
    ) -> Result<DescribeReport, GameError> {
        Ok(self
            .oracle
            .generate_descriptions_for_all(limit, service, model, on_progress)
            .await?)
    }

    // -- stats --------------------------------------------------------------

    /// Culprits most often released, by distinct rounds.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the query fails.
    pub async fn conflicting_suspects(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingSuspect>, GameError> {
        Ok(self.store.conflicting_suspects(limit).await?)
    }

    /// Questions whose rounds most often ended with the culprit released.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the query fails.
    pub async fn conflicting_questions(
        &self,
        limit: i64,
    ) -> Result<Vec<ConflictingQuestion>, GameError> {
        Ok(self.store.conflicting_questions(limit).await?)
    }
}
