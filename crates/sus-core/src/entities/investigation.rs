use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Round, Suspect};

/// Persisted shape of an investigation: ordered suspect references and the
/// culprit among them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InvestigationRecord {
    pub id: String,
    pub game_id: String,
    pub created_at: DateTime<Utc>,
    pub culprit_id: String,
    pub suspect_ids: Vec<String>,
}

/// One deduction case with its roster, rounds, and derived state.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Investigation {
    pub id: String,
    pub game_id: String,
    pub created_at: DateTime<Utc>,
    pub culprit_id: String,
    pub suspects: Vec<Suspect>,
    /// Oldest first.
    pub rounds: Vec<Round>,
    pub investigation_over: bool,
}

impl Investigation {
    /// Total eliminations across all rounds.
    #[must_use]
    pub fn elimination_count(&self) -> usize {
        self.rounds.iter().map(|r| r.eliminations.len()).sum()
    }

    /// Most recent round, if any.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.rounds.last()
    }
}
