use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A candidate profile backed by a portrait.
///
/// `free` and `fled` are not stored; they are computed from an investigation's
/// elimination history whenever the suspect is read as part of one.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Suspect {
    pub id: String,
    /// Portrait file name, e.g. `3fa8...c1.jpg`.
    pub image: String,
    pub created_at: DateTime<Utc>,
    /// Eliminated and innocent.
    #[serde(default)]
    pub free: bool,
    /// Eliminated and guilty.
    #[serde(default)]
    pub fled: bool,
}
