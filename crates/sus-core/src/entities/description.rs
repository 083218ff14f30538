use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Cached natural-language description of a suspect's portrait, produced by
/// one service/model pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Description {
    pub id: String,
    pub suspect_id: String,
    pub service: String,
    pub model: String,
    pub description: String,
    /// Prompt that produced the description.
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}
