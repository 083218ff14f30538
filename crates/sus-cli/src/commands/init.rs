use std::path::PathBuf;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    database: String,
    portraits: String,
    questions_added: usize,
    suspects_added: usize,
    suspects_total: usize,
}

/// Handle `sus init`.
pub async fn handle(args: &InitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let portraits = args
        .portraits
        .as_ref()
        .map_or_else(|| ctx.engine.settings().portraits_dir.clone(), PathBuf::from);

    let questions_added = ctx.engine.seed_questions().await?;
    let suspects_added = ctx.engine.seed_suspects(Some(portraits.as_path())).await?;
    let suspects_total = ctx.engine.suspect_count().await?;

    if suspects_total < sus_core::rules::ROSTER_SIZE {
        tracing::warn!(
            suspects_total,
            required = sus_core::rules::ROSTER_SIZE,
            "not enough portraits to start a game"
        );
    }

    output(
        &InitResponse {
            database: ctx.config.database.path.clone(),
            portraits: portraits.display().to_string(),
            questions_added,
            suspects_added,
            suspects_total,
        },
        flags.format,
    )
}
