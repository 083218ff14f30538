use std::sync::Arc;

use anyhow::Context;
use sus_config::SusConfig;
use sus_db::{Store, SusDb};

use crate::cli::GlobalFlags;

/// Load layered configuration (with `.env`) and apply CLI overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<SusConfig> {
    let mut config = SusConfig::load_with_dotenv().context("failed to load configuration")?;
    if let Some(path) = &flags.database {
        config.database.path.clone_from(path);
    }
    Ok(config)
}

/// Open (and migrate) the database, then copy tokens set in configuration
/// into the services table.
pub async fn open_store(config: &SusConfig) -> anyhow::Result<Arc<dyn Store>> {
    if let Some(dir) = config.database.parent_dir() {
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create database directory {}", dir.display()))?;
    }
    let store: Arc<dyn Store> = Arc::new(
        SusDb::open_local(&config.database.path)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?,
    );

    for (kind, token) in config.providers.configured_tokens() {
        store
            .save_token(kind.as_str(), token)
            .await
            .with_context(|| format!("failed to store {kind} token from config"))?;
        tracing::debug!(service = %kind, "token seeded from config");
    }
    Ok(store)
}
