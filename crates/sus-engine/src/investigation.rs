//! Opening and reading investigations.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use sus_core::entities::{Investigation, InvestigationRecord, Round, Suspect};
use sus_core::ids::PREFIX_INVESTIGATION;
use sus_core::rules::ROSTER_SIZE;
use sus_db::Store;
use sus_oracle::AnswerOracle;

use crate::error::{GameError, or_not_found};
use crate::round::RoundEngine;
use crate::score::is_investigation_over;
use crate::suspect_pool::SuspectPool;

/// Assemble the caller view of an investigation.
///
/// `roster` is in roster order. A suspect is `free` once eliminated while
/// innocent and `fled` once eliminated while guilty.
#[must_use]
pub fn assemble(
    record: InvestigationRecord,
    roster: Vec<Suspect>,
    rounds: Vec<Round>,
) -> Investigation {
    let eliminated: HashSet<&str> = rounds
        .iter()
        .flat_map(|r| &r.eliminations)
        .map(|e| e.suspect_id.as_str())
        .collect();
    let suspects = roster
        .into_iter()
        .map(|mut suspect| {
            let gone = eliminated.contains(suspect.id.as_str());
            let guilty = suspect.id == record.culprit_id;
            suspect.free = gone && !guilty;
            suspect.fled = gone && guilty;
            suspect
        })
        .collect();

    let mut investigation = Investigation {
        id: record.id,
        game_id: record.game_id,
        created_at: record.created_at,
        culprit_id: record.culprit_id,
        suspects,
        rounds,
        investigation_over: false,
    };
    investigation.investigation_over = is_investigation_over(&investigation);
    investigation
}

#[derive(Clone)]
pub struct InvestigationEngine {
    store: Arc<dyn Store>,
    suspects: SuspectPool,
    rounds: RoundEngine,
}

impl InvestigationEngine {
    #[must_use]
    pub fn new(store: Arc<dyn Store>, oracle: Arc<AnswerOracle>) -> Self {
        Self {
            suspects: SuspectPool::new(Arc::clone(&store)),
            rounds: RoundEngine::new(Arc::clone(&store), oracle),
            store,
        }
    }

    #[must_use]
    pub const fn rounds(&self) -> &RoundEngine {
        &self.rounds
    }

    /// Draw a roster, pick its culprit, and store both with round 0.
    ///
    /// The witness starts only after all three are committed.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] for an unknown game,
    /// [`GameError::InsufficientSuspects`] when the pool is too small,
    /// [`GameError::EmptyQuestionBank`] when no question can be drawn,
    /// [`GameError::MalformedInvestigation`] if the roster is rejected, or a
    /// store error.
    pub async fn new_investigation(&self, game_id: &str) -> Result<Investigation, GameError> {
        self.store
            .get_game(game_id)
            .await
            .map_err(|e| or_not_found(e, "game", game_id))?;

        let roster = self.suspects.draw(ROSTER_SIZE).await?;
        let culprit = rand::rng().random_range(0..roster.len());
        let record = InvestigationRecord {
            id: self.store.next_id(PREFIX_INVESTIGATION).await?,
            game_id: game_id.to_string(),
            created_at: Utc::now(),
            culprit_id: roster[culprit].id.clone(),
            suspect_ids: roster.iter().map(|s| s.id.clone()).collect(),
        };
        let first = self.rounds.prepare(&record.id).await?;
        self.store.open_investigation(&record, &first).await?;
        tracing::info!(
            investigation = %record.id,
            game = game_id,
            culprit = %record.culprit_id,
            "investigation opened"
        );

        self.rounds.launch(&first, record.culprit_id.clone());
        Ok(assemble(record, roster, vec![first]))
    }

    /// The game's latest investigation with rounds, eliminations, and
    /// suspect status filled in.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotFound`] when the game has no investigation, or
    /// a store error.
    pub async fn current_investigation(&self, game_id: &str) -> Result<Investigation, GameError> {
        let record = self
            .store
            .latest_investigation(game_id)
            .await?
            .ok_or_else(|| GameError::NotFound {
                entity: "investigation",
                id: game_id.to_string(),
            })?;
        self.load(record).await
    }

    async fn load(&self, record: InvestigationRecord) -> Result<Investigation, GameError> {
        let mut roster = Vec::with_capacity(record.suspect_ids.len());
        for id in &record.suspect_ids {
            roster.push(
                self.store
                    .get_suspect(id)
                    .await
                    .map_err(|e| or_not_found(e, "suspect", id))?,
            );
        }
        let rounds = self.store.rounds_for_investigation(&record.id).await?;
        Ok(assemble(record, roster, rounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sus_core::entities::{Elimination, Question};

    fn record(n: usize) -> InvestigationRecord {
        InvestigationRecord {
            id: "inv-1".into(),
            game_id: "gam-1".into(),
            created_at: Utc::now(),
            culprit_id: "s0".into(),
            suspect_ids: (0..n).map(|i| format!("s{i}")).collect(),
        }
    }

    fn roster(n: usize) -> Vec<Suspect> {
        (0..n)
            .map(|i| Suspect {
                id: format!("s{i}"),
                image: format!("s{i}.jpg"),
                created_at: Utc::now(),
                free: false,
                fled: false,
            })
            .collect()
    }

    fn round(eliminated: &[&str]) -> Round {
        Round {
            id: "rnd-1".into(),
            investigation_id: "inv-1".into(),
            question: Question {
                id: "que-1".into(),
                english: "Is the suspect tall?".into(),
                czech: String::new(),
                polish: String::new(),
                topic: "basic".into(),
                level: 1,
            },
            answer: "YES".into(),
            eliminations: eliminated
                .iter()
                .map(|s| Elimination {
                    id: format!("elm-{s}"),
                    round_id: "rnd-1".into(),
                    suspect_id: (*s).to_string(),
                    created_at: Utc::now(),
                })
                .collect(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn statuses_follow_eliminations() {
        let inv = assemble(record(15), roster(15), vec![round(&["s1", "s0"])]);
        let by_id = |id: &str| inv.suspects.iter().find(|s| s.id == id).unwrap();

        assert!(by_id("s1").free && !by_id("s1").fled);
        assert!(by_id("s0").fled && !by_id("s0").free);
        assert!(!by_id("s2").free && !by_id("s2").fled);
        assert!(!inv.investigation_over);
    }

    #[test]
    fn fourteen_eliminations_close_the_investigation() {
        let ids: Vec<String> = (1..15).map(|i| format!("s{i}")).collect();
        let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
        let inv = assemble(record(15), roster(15), vec![round(&refs)]);
        assert!(inv.investigation_over);
        assert_eq!(inv.suspects.iter().filter(|s| s.free).count(), 14);
    }

    #[test]
    fn roster_order_is_preserved() {
        let mut suspects = roster(15);
        suspects.reverse();
        let inv = assemble(record(15), suspects, Vec::new());
        assert_eq!(inv.suspects.first().unwrap().id, "s14");
        assert_eq!(inv.suspects.last().unwrap().id, "s0");
    }
}
