use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Create the database and seed questions, portraits, and tokens.
    Init(InitArgs),
    /// Start a new game.
    NewGame(RoundWaitArgs),
    /// Show the current game (starts one if there is none).
    Game,
    /// Ask the witness another question in the current investigation.
    NextRound(RoundWaitArgs),
    /// Open a new investigation in the current game.
    NextInvestigation(RoundWaitArgs),
    /// Wait for a round's answer.
    Wait(WaitArgs),
    /// Release a suspect in a round.
    Eliminate(EliminateArgs),
    /// Sign a game's score with an investigator name.
    SaveScore(SaveScoreArgs),
    /// High-score table.
    Scores,
    /// Models and services.
    Models {
        #[command(subcommand)]
        action: Option<ModelCommands>,
    },
    /// Store the API token for a service.
    Token(TokenArgs),
    /// Describe one suspect's portrait and cache the description.
    Describe(DescribeArgs),
    /// Describe every suspect that lacks descriptions.
    DescribeAll(DescribeAllArgs),
    /// Culprits and questions that most often misled players.
    Stats(StatsArgs),
    /// Print the JSON Schema of an output type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Portrait directory (defaults to `game.portraits_dir`).
    #[arg(long)]
    pub portraits: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RoundWaitArgs {
    /// Return as soon as the round exists instead of waiting for the answer.
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Clone, Debug, Args)]
pub struct WaitArgs {
    /// Round id.
    pub round: String,
    /// Give up after this many seconds (defaults to `oracle.timeout_secs`).
    #[arg(long)]
    pub timeout: Option<u64>,
    /// Poll interval in milliseconds (defaults to `oracle.poll_interval_ms`).
    #[arg(long)]
    pub poll_ms: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct EliminateArgs {
    pub suspect: String,
    pub round: String,
    pub investigation: String,
}

#[derive(Clone, Debug, Args)]
pub struct SaveScoreArgs {
    /// Investigator name.
    pub name: String,
    /// Game id.
    pub game: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum ModelCommands {
    /// List services and models.
    List,
    /// Make a model the active one.
    Activate { name: String },
    /// Register a model under an existing service.
    Add { name: String, service: String },
}

#[derive(Clone, Debug, Args)]
pub struct TokenArgs {
    /// Service name, e.g. `OpenAI`.
    pub service: String,
    pub token: String,
}

#[derive(Clone, Debug, Args)]
pub struct DescribeArgs {
    /// Suspect id.
    pub suspect: String,
    /// Service (defaults to the active model's).
    #[arg(long)]
    pub service: Option<String>,
    /// Model (defaults to the active model).
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DescribeAllArgs {
    /// Describe suspects with fewer than this many descriptions.
    #[arg(long, default_value_t = 1)]
    pub limit: i64,
    /// Service (defaults to the active model's).
    #[arg(long)]
    pub service: Option<String>,
    /// Model (defaults to the active model).
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Max conflicting suspects.
    #[arg(long, default_value_t = 10)]
    pub suspects: i64,
    /// Max conflicting questions.
    #[arg(long, default_value_t = 15)]
    pub questions: i64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    GameState,
    Investigation,
    Round,
    Suspect,
    Question,
    Elimination,
    Description,
    FinalScore,
    Model,
    Service,
    ConflictingSuspect,
    ConflictingQuestion,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Type to describe.
    pub type_name: SchemaType,
}
