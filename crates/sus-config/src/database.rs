//! Database location.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// `<data dir>/suspects/default.db`, or a relative `default.db` when the
/// platform has no data directory.
fn default_path() -> String {
    dirs::data_dir()
        .map(|dir| dir.join("suspects").join("default.db"))
        .unwrap_or_else(|| PathBuf::from("default.db"))
        .to_string_lossy()
        .into_owned()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Path to the libSQL database file, or `:memory:`.
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }

    /// Directory that must exist before the database file can be created.
    #[must_use]
    pub fn parent_dir(&self) -> Option<PathBuf> {
        if self.is_in_memory() {
            return None;
        }
        PathBuf::from(&self.path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(std::path::Path::to_path_buf)
    }
}
