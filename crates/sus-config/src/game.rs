//! Gameplay settings.

use serde::{Deserialize, Serialize};
use sus_core::rules::DEFAULT_INVESTIGATOR;

fn default_investigator() -> String {
    DEFAULT_INVESTIGATOR.to_string()
}

fn default_portraits_dir() -> String {
    String::from("portraits")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Name recorded on new games until the player signs the score.
    #[serde(default = "default_investigator")]
    pub default_investigator: String,

    /// Directory holding suspect portraits (`.jpg`/`.jpeg`).
    #[serde(default = "default_portraits_dir")]
    pub portraits_dir: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            default_investigator: default_investigator(),
            portraits_dir: default_portraits_dir(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GameConfig::default();
        assert_eq!(config.default_investigator, "anonymous");
        assert_eq!(config.portraits_dir, "portraits");
    }
}
