use serde::Serialize;
use sus_core::entities::Model;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{ModelCommands, TokenArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ServiceStatus {
    name: String,
    token_set: bool,
}

#[derive(Debug, Serialize)]
struct ModelsResponse {
    services: Vec<ServiceStatus>,
    models: Vec<Model>,
}

#[derive(Debug, Serialize)]
struct ModelAdded {
    model: String,
    service: String,
    added: bool,
}

/// Handle `sus models`.
pub async fn handle(
    action: Option<ModelCommands>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action.unwrap_or(ModelCommands::List) {
        ModelCommands::List => {
            let services = ctx
                .engine
                .list_services()
                .await?
                .into_iter()
                .map(|s| ServiceStatus {
                    token_set: s.has_token(),
                    name: s.name,
                })
                .collect();
            let models = ctx.engine.list_models().await?;
            output(&ModelsResponse { services, models }, flags.format)
        }
        ModelCommands::Activate { name } => {
            let model = ctx.engine.set_active_model(&name).await?;
            output(&model, flags.format)
        }
        ModelCommands::Add { name, service } => {
            let added = ctx.engine.add_model(&name, &service).await?;
            output(
                &ModelAdded {
                    model: name,
                    service,
                    added,
                },
                flags.format,
            )
        }
    }
}

/// Handle `sus token`.
pub async fn token(args: &TokenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.engine.save_token(&args.service, &args.token).await?;
    output(
        &ServiceStatus {
            name: args.service.clone(),
            token_set: !args.token.is_empty(),
        },
        flags.format,
    )
}
