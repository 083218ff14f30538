use sus_config::SusConfig;
use sus_core::enums::ProviderKind;
use sus_engine::GameEngine;

use crate::bootstrap;
use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: SusConfig,
    pub engine: GameEngine,
}

impl AppContext {
    pub async fn init(config: SusConfig) -> anyhow::Result<Self> {
        let store = bootstrap::open_store(&config).await?;
        let engine = GameEngine::from_config(store, &config);
        Ok(Self { config, engine })
    }

    /// Explicit service/model, or the active model's.
    pub async fn model_choice(
        &self,
        service: Option<String>,
        model: Option<String>,
    ) -> anyhow::Result<(String, String)> {
        match (service, model) {
            (Some(service), Some(model)) => Ok((service, model)),
            (service, model) => {
                let active = self.engine.active_model().await?;
                Ok((
                    service.unwrap_or(active.service),
                    model.unwrap_or(active.name),
                ))
            }
        }
    }
}

/// Warn when the active model has no usable token.
pub async fn warn_unconfigured(ctx: &AppContext, flags: &GlobalFlags) {
    if flags.quiet {
        return;
    }
    match ctx.engine.active_model().await {
        Ok(model) => {
            let has_token = ctx
                .engine
                .list_services()
                .await
                .ok()
                .and_then(|services| services.into_iter().find(|s| s.name == model.service))
                .is_some_and(|s| s.has_token());
            let needs_token = model
                .service
                .parse::<ProviderKind>()
                .is_ok_and(ProviderKind::requires_token);
            if needs_token && !has_token {
                tracing::warn!(
                    service = %model.service,
                    "active model's service has no token; answers will fail. Run 'sus token'"
                );
            }
        }
        Err(error) => tracing::warn!(%error, "no active model"),
    }
}
