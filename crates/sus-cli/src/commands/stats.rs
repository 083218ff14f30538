use serde::Serialize;
use sus_core::entities::{ConflictingQuestion, ConflictingSuspect};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatsResponse {
    suspects: Vec<ConflictingSuspect>,
    questions: Vec<ConflictingQuestion>,
}

/// Handle `sus stats`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let suspects = ctx.engine.conflicting_suspects(args.suspects).await?;
    let questions = ctx.engine.conflicting_questions(args.questions).await?;
    output(&StatsResponse { suspects, questions }, flags.format)
}
