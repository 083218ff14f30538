use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One line of the high-score table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FinalScore {
    /// 1-based rank, highest score first.
    pub position: i64,
    pub score: i64,
    pub investigator: String,
    pub game_id: String,
}

/// A suspect that was released while being the culprit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConflictingSuspect {
    pub suspect_id: String,
    pub image: String,
    /// Distinct rounds in which this culprit was released.
    pub wrong_eliminations: i64,
}

/// A question whose round ended with the culprit released.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ConflictingQuestion {
    pub question_id: String,
    pub english: String,
    pub czech: String,
    pub polish: String,
    pub wrong_eliminations: i64,
}
