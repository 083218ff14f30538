//! Recording eliminations and scoring them.

use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;

use sus_core::entities::Elimination;
use sus_core::ids::PREFIX_ELIMINATION;
use sus_db::Store;

use crate::error::{GameError, or_not_found};
use crate::score::ScoreEngine;

/// What a single elimination did to the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EliminationOutcome {
    pub elimination: Elimination,
    /// The released suspect was the culprit; the game is now over.
    pub culprit_released: bool,
    /// Points added to the game score, zero when the culprit was released.
    pub score_delta: i64,
}

#[derive(Clone)]
pub struct EliminationLedger {
    store: Arc<dyn Store>,
    scores: ScoreEngine,
}

impl EliminationLedger {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        let scores = ScoreEngine::new(Arc::clone(&store));
        Self { store, scores }
    }

    /// Append an elimination, then score it unless the culprit was released.
    ///
    /// The elimination is recorded whatever its effect; duplicates included.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] when the investigation does not exist,
    /// or a store error when the round or suspect reference is invalid.
    pub async fn save_elimination(
        &self,
        suspect_id: &str,
        round_id: &str,
        investigation_id: &str,
    ) -> Result<EliminationOutcome, GameError> {
        let investigation = self
            .store
            .get_investigation(investigation_id)
            .await
            .map_err(|e| or_not_found(e, "investigation", investigation_id))?;

        let elimination = Elimination {
            id: self.store.next_id(PREFIX_ELIMINATION).await?,
            round_id: round_id.to_string(),
            suspect_id: suspect_id.to_string(),
            created_at: Utc::now(),
        };
        self.store.insert_elimination(&elimination).await?;

        let culprit_released = suspect_id == investigation.culprit_id;
        let score_delta = if culprit_released {
            tracing::info!(
                investigation = investigation_id,
                suspect = suspect_id,
                "culprit released"
            );
            0
        } else {
            self.scores
                .increase_score(&investigation.game_id, round_id)
                .await?
        };

        Ok(EliminationOutcome {
            elimination,
            culprit_released,
            score_delta,
        })
    }
}
