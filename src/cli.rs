use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kpiscore",
    version,
    about = "KPI goal scoring and Performer of the Week reporting CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding kpiscore.toml
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve a free-text team name to its category
    Team(TeamCommand),
    /// Score a metrics document for a team
    Score(ScoreCommand),
    /// Print the headline target value of a metrics document
    Target(TargetCommand),
    /// Create or update goal records
    #[command(subcommand)]
    Goal(GoalCommands),
    /// Rank scored goals and list the Performers of the Week
    Report(ReportCommand),
}

#[derive(Subcommand)]
pub enum GoalCommands {
    Create(GoalCreateCommand),
    Update(GoalUpdateCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct TeamCommand {
    pub name: String,
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(long)]
    pub team: String,
    /// Metrics JSON file, or `-` for stdin
    pub metrics: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct TargetCommand {
    #[arg(long)]
    pub team: String,
    /// Metrics JSON file, or `-` for stdin
    pub metrics: PathBuf,
}

#[derive(Args)]
pub struct GoalCreateCommand {
    #[arg(long)]
    pub team: String,
    /// New goal JSON file, or `-` for stdin
    pub goal: PathBuf,
}

#[derive(Args)]
pub struct GoalUpdateCommand {
    #[arg(long)]
    pub team: String,
    /// Stored goal JSON file
    pub goal: PathBuf,
    /// Reported metrics JSON file, or `-` for stdin
    pub metrics: PathBuf,
    /// Write the updated goal back to the goal file
    #[arg(long)]
    pub in_place: bool,
}

#[derive(Args)]
pub struct ReportCommand {
    /// Goal file or directory of goal files
    pub path: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}
