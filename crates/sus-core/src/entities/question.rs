use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pre-authored yes/no question. English is the canonical text.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub english: String,
    pub czech: String,
    pub polish: String,
    pub topic: String,
    pub level: i64,
}
