//! # sus-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SUSPECTS_*` prefix, `__` as separator)
//! 2. Project-level `.suspects/config.toml`
//! 3. User-level `~/.config/suspects/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SUSPECTS_DATABASE__PATH` -> `database.path`,
//! `SUSPECTS_PROVIDERS__OPENAI__TOKEN` -> `providers.openai.token`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use sus_config::SusConfig;
//!
//! let config = SusConfig::load_with_dotenv().expect("config");
//! println!("database at {}", config.database.path);
//! ```

mod database;
mod error;
mod game;
mod oracle;
mod providers;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use game::GameConfig;
pub use oracle::OracleConfig;
pub use providers::{ProviderConfig, ProvidersConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SusConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub oracle: OracleConfig,
    #[serde(default)]
    pub providers: ProvidersConfig,
}

impl SusConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the oracle timing is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the oracle timing is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or the oracle timing is invalid.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.oracle.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".suspects/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("SUSPECTS_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("suspects").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = SusConfig::default();
        assert_eq!(config.game.default_investigator, "anonymous");
        assert_eq!(config.oracle.timeout_secs, 60);
        assert!(!config.providers.openai.has_token());
    }

    #[test]
    fn figment_builds_without_files() {
        let config: SusConfig = figment::Figment::from(Serialized::defaults(SusConfig::default()))
            .extract()
            .expect("should extract defaults");
        assert_eq!(config.oracle.poll_interval_ms, 1000);
    }
}
