use anyhow::Context;
use clap::Parser;

mod bootstrap;
mod cli;
mod commands;
mod context;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("sus error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    ui::init(&flags);

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let config = bootstrap::load_config(&flags)?;
    let ctx = context::AppContext::init(config)
        .await
        .context("failed to initialize the game engine")?;

    if command_asks_witness(&cli.command) {
        context::warn_unconfigured(&ctx, &flags).await;
    }

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SUSPECTS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Commands that open a round or call a provider.
const fn command_asks_witness(command: &cli::Commands) -> bool {
    matches!(
        command,
        cli::Commands::NewGame(_)
            | cli::Commands::NextRound(_)
            | cli::Commands::NextInvestigation(_)
            | cli::Commands::Describe(_)
            | cli::Commands::DescribeAll(_)
    )
}
