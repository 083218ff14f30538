use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The player's decision to release a suspect during a round.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Elimination {
    pub id: String,
    pub round_id: String,
    pub suspect_id: String,
    pub created_at: DateTime<Utc>,
}
