//! Opening rounds.

use std::sync::Arc;

use chrono::Utc;

use sus_core::entities::Round;
use sus_core::ids::PREFIX_ROUND;
use sus_db::Store;
use sus_oracle::AnswerOracle;

use crate::error::{GameError, or_not_found};
use crate::question_bank::QuestionBank;

/// Creates rounds and hands each one to the oracle.
#[derive(Clone)]
pub struct RoundEngine {
    store: Arc<dyn Store>,
    questions: QuestionBank,
    oracle: Arc<AnswerOracle>,
}

impl RoundEngine {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, oracle: Arc<AnswerOracle>) -> Self {
        let questions = QuestionBank::new(Arc::clone(&store));
        Self {
            store,
            questions,
            oracle,
        }
    }

    /// Draw a question, store a round with an empty answer, and start the
    /// witness in the background. Returns before the answer exists.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown investigation,
    /// [`GameError::EmptyQuestionBank`], or a store error.
    pub async fn new_round(&self, investigation_id: &str) -> Result<Round, GameError> {
        let investigation = self
            .store
            .get_investigation(investigation_id)
            .await
            .map_err(|e| or_not_found(e, "investigation", investigation_id))?;
        let round = self.prepare(investigation_id).await?;
        self.store.insert_round(&round).await?;
        self.launch(&round, investigation.culprit_id);
        Ok(round)
    }

    /// Draw a question and build an unanswered round without storing it.
    pub(crate) async fn prepare(&self, investigation_id: &str) -> Result<Round, GameError> {
        let question = self.questions.draw().await?;
        Ok(Round {
            id: self.store.next_id(PREFIX_ROUND).await?,
            investigation_id: investigation_id.to_string(),
            question,
            answer: String::new(),
            eliminations: Vec::new(),
            created_at: Utc::now(),
        })
    }

    /// Start the witness on a stored round.
    pub(crate) fn launch(&self, round: &Round, culprit_id: String) {
        tracing::info!(
            round = %round.id,
            investigation = %round.investigation_id,
            question = %round.question.english,
            "round opened"
        );
        // Detached: the handle is dropped, the task keeps running.
        drop(self.oracle.spawn_detached(round.clone(), culprit_id));
    }
}
