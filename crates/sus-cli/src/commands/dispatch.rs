use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => commands::init::handle(&args, ctx, flags).await,
        Commands::NewGame(args) => commands::play::new_game(&args, ctx, flags).await,
        Commands::Game => commands::play::game(ctx, flags).await,
        Commands::NextRound(args) => commands::play::next_round(&args, ctx, flags).await,
        Commands::NextInvestigation(args) => {
            commands::play::next_investigation(&args, ctx, flags).await
        }
        Commands::Wait(args) => commands::play::wait(&args, ctx, flags).await,
        Commands::Eliminate(args) => commands::play::eliminate(&args, ctx, flags).await,
        Commands::SaveScore(args) => commands::play::save_score(&args, ctx, flags).await,
        Commands::Scores => commands::play::scores(ctx, flags).await,
        Commands::Models { action } => commands::models::handle(action, ctx, flags).await,
        Commands::Token(args) => commands::models::token(&args, ctx, flags).await,
        Commands::Describe(args) => commands::describe::one(&args, ctx, flags).await,
        Commands::DescribeAll(args) => commands::describe::all(&args, ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
