use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Elimination, Question};
use crate::enums::AnswerState;

/// One question-turn within an investigation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Round {
    pub id: String,
    pub investigation_id: String,
    pub question: Question,
    /// Empty until the oracle writes the witness answer or a failure sentinel.
    pub answer: String,
    pub eliminations: Vec<Elimination>,
    pub created_at: DateTime<Utc>,
}

impl Round {
    #[must_use]
    pub fn answer_state(&self) -> AnswerState {
        AnswerState::from_answer(&self.answer)
    }
}
