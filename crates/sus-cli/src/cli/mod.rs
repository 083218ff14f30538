use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `sus` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sus",
    version,
    about = "Unusual Suspects - a witness, fifteen faces, one culprit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only, no progress)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database path (overrides `database.path`)
    #[arg(long, global = true)]
    pub database: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            database: self.database.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::root_commands::{ModelCommands, SchemaType};
    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_and_after_subcommand() {
        let cli = Cli::try_parse_from(["sus", "--format", "raw", "scores", "--verbose"])
            .expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Scores));
    }

    #[test]
    fn eliminate_takes_three_positionals() {
        let cli = Cli::try_parse_from(["sus", "eliminate", "p01", "rnd-1", "inv-1"])
            .expect("cli should parse");
        let Commands::Eliminate(args) = cli.command else {
            panic!("expected eliminate");
        };
        assert_eq!(args.suspect, "p01");
        assert_eq!(args.round, "rnd-1");
        assert_eq!(args.investigation, "inv-1");
    }

    #[test]
    fn wait_overrides_are_optional() {
        let cli = Cli::try_parse_from(["sus", "wait", "rnd-1", "--timeout", "5"])
            .expect("cli should parse");
        let Commands::Wait(args) = cli.command else {
            panic!("expected wait");
        };
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.poll_ms, None);
    }

    #[test]
    fn models_defaults_to_list() {
        let cli = Cli::try_parse_from(["sus", "models"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Models { action: None }));

        let cli = Cli::try_parse_from(["sus", "models", "activate", "claude-3-haiku-20240307"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Models { action: Some(ModelCommands::Activate { ref name }) }
                if name == "claude-3-haiku-20240307"
        ));
    }

    #[test]
    fn schema_rejects_unknown_types() {
        assert!(Cli::try_parse_from(["sus", "schema", "widget"]).is_err());
        let cli = Cli::try_parse_from(["sus", "schema", "game-state"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Schema(ref args) if args.type_name == SchemaType::GameState
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["sus", "--format", "xml", "scores"]).is_err());
    }
}
