//! Scoring and the derived over-conditions.
//!
//! Each non-culprit elimination adds `level * eliminations_in_round`, where
//! the count includes the elimination just recorded. Later eliminations in the
//! same round are worth more, and every investigation survived raises the
//! multiplier.

use std::sync::Arc;

use sus_core::entities::Investigation;
use sus_core::rules::ELIMINATIONS_TO_CLOSE;
use sus_db::Store;

use crate::error::GameError;

/// Score added for one elimination.
#[must_use]
pub const fn score_delta(level: i64, eliminations_in_round: i64) -> i64 {
    level * eliminations_in_round
}

/// Over once exactly fourteen eliminations have been recorded, whoever they hit.
#[must_use]
pub fn is_investigation_over(investigation: &Investigation) -> bool {
    investigation.elimination_count() == ELIMINATIONS_TO_CLOSE
}

/// Over once the culprit has been eliminated in any round.
#[must_use]
pub fn is_game_over(investigation: &Investigation) -> bool {
    investigation
        .rounds
        .iter()
        .flat_map(|r| &r.eliminations)
        .any(|e| e.suspect_id == investigation.culprit_id)
}

#[derive(Clone)]
pub struct ScoreEngine {
    store: Arc<dyn Store>,
}

impl ScoreEngine {
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Number of investigations the game has opened.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if the count fails.
    pub async fn level(&self, game_id: &str) -> Result<i64, GameError> {
        Ok(self.store.count_investigations(game_id).await?)
    }

    /// Add `level * eliminations_in_round` to the game's score. Returns the delta.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Store`] if a read or the update fails.
    pub async fn increase_score(&self, game_id: &str, round_id: &str) -> Result<i64, GameError> {
        let level = self.level(game_id).await?;
        let eliminations = self.store.count_eliminations_in_round(round_id).await?;
        let delta = score_delta(level, eliminations);
        self.store.add_score(game_id, delta).await?;
        tracing::info!(
            game = game_id,
            round = round_id,
            level,
            eliminations,
            delta,
            "score increased"
        );
        Ok(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use sus_core::entities::{Elimination, Question, Round};

    fn investigation(eliminated: &[&str]) -> Investigation {
        let eliminations = eliminated
            .iter()
            .enumerate()
            .map(|(i, s)| Elimination {
                id: format!("elm-{i}"),
                round_id: "rnd-1".into(),
                suspect_id: (*s).to_string(),
                created_at: Utc::now(),
            })
            .collect();
        Investigation {
            id: "inv-1".into(),
            game_id: "gam-1".into(),
            created_at: Utc::now(),
            culprit_id: "culprit".into(),
            suspects: Vec::new(),
            rounds: vec![Round {
                id: "rnd-1".into(),
                investigation_id: "inv-1".into(),
                question: Question {
                    id: "que-1".into(),
                    english: "?".into(),
                    czech: String::new(),
                    polish: String::new(),
                    topic: String::new(),
                    level: 1,
                },
                answer: String::new(),
                eliminations,
                created_at: Utc::now(),
            }],
            investigation_over: false,
        }
    }

    #[rstest]
    #[case(1, 1, 1)]
    #[case(2, 2, 4)]
    #[case(3, 5, 15)]
    fn delta_is_level_times_round_count(#[case] level: i64, #[case] n: i64, #[case] expected: i64) {
        assert_eq!(score_delta(level, n), expected);
    }

    #[test]
    fn over_at_exactly_fourteen() {
        let thirteen: Vec<String> = (0..13).map(|i| format!("s{i}")).collect();
        let refs: Vec<&str> = thirteen.iter().map(String::as_str).collect();
        assert!(!is_investigation_over(&investigation(&refs)));

        let mut fourteen = refs.clone();
        fourteen.push("culprit");
        assert!(is_investigation_over(&investigation(&fourteen)));
    }

    #[test]
    fn game_over_only_when_culprit_eliminated() {
        assert!(!is_game_over(&investigation(&["s1", "s2"])));
        assert!(is_game_over(&investigation(&["s1", "culprit"])));
    }
}
