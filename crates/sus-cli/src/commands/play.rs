//! Gameplay commands: games, rounds, waiting, eliminations, scores.

use std::time::Duration;

use serde::Serialize;
use sus_core::entities::GameState;
use sus_engine::WaitOutcome;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{EliminateArgs, RoundWaitArgs, SaveScoreArgs, WaitArgs};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `sus new-game`.
pub async fn new_game(
    args: &RoundWaitArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.engine.new_game().await?;
    let state = settle(state, args, ctx).await?;
    output(&state, flags.format)
}

/// Handle `sus game`.
pub async fn game(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = ctx.engine.current_game().await?;
    output(&state, flags.format)
}

/// Handle `sus next-round`.
pub async fn next_round(
    args: &RoundWaitArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.engine.next_round().await?;
    let state = settle(state, args, ctx).await?;
    output(&state, flags.format)
}

/// Handle `sus next-investigation`.
pub async fn next_investigation(
    args: &RoundWaitArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let state = ctx.engine.next_investigation().await?;
    let state = settle(state, args, ctx).await?;
    output(&state, flags.format)
}

/// The witness runs inside this process, so a freshly opened round is only
/// answered if we stay alive for it. Waits, then re-reads the game.
async fn settle(
    state: GameState,
    args: &RoundWaitArgs,
    ctx: &AppContext,
) -> anyhow::Result<GameState> {
    if args.no_wait {
        return Ok(state);
    }
    let Some(round) = state.investigation.current_round() else {
        return Ok(state);
    };

    let progress = Progress::spinner("waiting for the witness");
    let outcome = ctx.engine.wait_for_answer(&round.id).await;
    progress.finish_clear();
    match &outcome {
        WaitOutcome::Answered(_) => {}
        WaitOutcome::Failed(sentinel) => {
            tracing::warn!(round = %round.id, %sentinel, "witness failed");
        }
        WaitOutcome::TimedOut => {
            tracing::warn!(round = %round.id, "witness did not answer in time");
        }
        WaitOutcome::ReadFailed(error) => {
            tracing::warn!(round = %round.id, %error, "could not read answer");
        }
    }
    Ok(ctx.engine.current_game().await?)
}

#[derive(Debug, Serialize)]
struct WaitResponse {
    round_id: String,
    outcome: WaitOutcome,
}

/// Handle `sus wait`.
pub async fn wait(args: &WaitArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let settings = ctx.engine.settings();
    let poll = args.poll_ms.map_or(settings.poll_interval, Duration::from_millis);
    let timeout = args.timeout.map_or(settings.wait_timeout, Duration::from_secs);

    let progress = Progress::spinner(&format!("waiting for round {}", args.round));
    let outcome = ctx.engine.wait_for_answer_with(&args.round, poll, timeout).await;
    progress.finish_clear();

    output(
        &WaitResponse {
            round_id: args.round.clone(),
            outcome,
        },
        flags.format,
    )
}

/// Handle `sus eliminate`.
pub async fn eliminate(
    args: &EliminateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx
        .engine
        .eliminate_suspect(&args.suspect, &args.round, &args.investigation)
        .await?;
    output(&outcome, flags.format)
}

#[derive(Debug, Serialize)]
struct SaveScoreResponse<'a> {
    game_id: &'a str,
    investigator: &'a str,
}

/// Handle `sus save-score`.
pub async fn save_score(
    args: &SaveScoreArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.engine.save_score(&args.name, &args.game).await?;
    output(
        &SaveScoreResponse {
            game_id: &args.game,
            investigator: &args.name,
        },
        flags.format,
    )
}

/// Handle `sus scores`.
pub async fn scores(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let scores = ctx.engine.scores().await?;
    output(&scores, flags.format)
}
