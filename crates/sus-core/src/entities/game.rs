use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Investigation;

/// A play session: the player keeps solving investigations until they
/// release a culprit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub score: i64,
    pub investigator: String,
}

/// A game together with its current investigation and derived progress.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GameState {
    #[serde(flatten)]
    pub game: Game,
    pub investigation: Investigation,
    /// Investigations created under this game, the current one included.
    pub level: i64,
    pub game_over: bool,
}
