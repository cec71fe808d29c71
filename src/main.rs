mod cli;
mod config;
mod error;
mod goal;
mod performers;
mod report;
mod scoring;
mod team;
mod types;

use crate::error::{KpiError, Result};
use crate::goal::{Goal, NewGoal};
use crate::report::{OutputFormat, ScoreOutput};
use crate::team::{TeamCategory, TeamResolver};
use crate::types::config::{KpiConfig, DEFAULT_PRECISION};
use crate::types::metrics::Metrics;
use chrono::Utc;
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const UNSCORED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn read_document(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        return Ok(content);
    }
    if !path.exists() {
        return Err(KpiError::PathNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

fn read_metrics(path: &Path) -> Result<Metrics> {
    let metrics = Metrics::from_json_str(&read_document(path)?)?;
    if metrics.is_empty() {
        tracing::warn!(path = %path.display(), "metrics document is empty");
    } else {
        tracing::debug!(path = %path.display(), fields = metrics.len(), "metrics loaded");
    }
    Ok(metrics)
}

fn output_format(
    requested: Option<cli::ReportFormat>,
    config: Option<&KpiConfig>,
) -> OutputFormat {
    match requested {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => config
            .and_then(KpiConfig::output_format)
            .unwrap_or(OutputFormat::Json),
    }
}

fn scored_exit_code(team: TeamCategory) -> i32 {
    if team.is_recognized() {
        exit_code::SUCCESS
    } else {
        exit_code::UNSCORED
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let loaded = config::load_config(&cli.root)?;
    let resolver = TeamResolver::from_config(loaded.as_ref())?;

    match cli.command {
        cli::Commands::Team(cmd) => {
            let team = resolver.resolve(&cmd.name);
            println!("{team}");
            Ok(scored_exit_code(team))
        }
        cli::Commands::Score(cmd) => {
            let metrics = read_metrics(&cmd.metrics)?;
            let team = resolver.resolve(&cmd.team);
            let (scored, card) = scoring::score_with_card(team, &metrics);

            let precision = loaded
                .as_ref()
                .map(KpiConfig::precision)
                .unwrap_or(DEFAULT_PRECISION);
            let rendered = report::render_scorecard(
                &ScoreOutput {
                    team,
                    card: card.as_ref(),
                    metrics: &scored,
                },
                output_format(cmd.format, loaded.as_ref()),
                precision,
            )?;
            println!("{rendered}");
            Ok(scored_exit_code(team))
        }
        cli::Commands::Target(cmd) => {
            let metrics = read_metrics(&cmd.metrics)?;
            let team = resolver.resolve(&cmd.team);
            println!("{}", scoring::extract_target_value(team, &metrics));
            Ok(scored_exit_code(team))
        }
        cli::Commands::Goal(cli::GoalCommands::Create(cmd)) => {
            let content = read_document(&cmd.goal)?;
            let new_goal: NewGoal = serde_json::from_str(&content)
                .map_err(|e| KpiError::InvalidGoal(e.to_string()))?;
            let team = resolver.resolve(&cmd.team);
            let goal = Goal::create(new_goal, team, Utc::now());
            println!("{}", serde_json::to_string_pretty(&goal)?);
            Ok(scored_exit_code(team))
        }
        cli::Commands::Goal(cli::GoalCommands::Update(cmd)) => {
            if cmd.in_place && cmd.goal == Path::new("-") {
                return Err(KpiError::InvalidGoal(
                    "--in-place requires a goal file, not stdin".to_string(),
                ));
            }
            let content = read_document(&cmd.goal)?;
            let mut goal: Goal = serde_json::from_str(&content)
                .map_err(|e| KpiError::InvalidGoal(format!("{}: {}", cmd.goal.display(), e)))?;
            let update = read_metrics(&cmd.metrics)?;
            let team = resolver.resolve(&cmd.team);
            goal.apply_metrics_update(&update, team, Utc::now());

            let json = serde_json::to_string_pretty(&goal)?;
            if cmd.in_place {
                std::fs::write(&cmd.goal, json)?;
                tracing::info!(
                    goal_id = goal.id,
                    total = ?goal.total_score(),
                    performer = goal.is_performer_of_the_week(),
                    path = %cmd.goal.display(),
                    "goal updated"
                );
                println!("goal written: {}", cmd.goal.display());
            } else {
                println!("{json}");
            }
            Ok(scored_exit_code(team))
        }
        cli::Commands::Report(cmd) => {
            let goals = performers::load_team_goals(&cmd.path)?;
            let report = performers::build_report(&goals, &resolver, Utc::now());
            let rendered =
                report::render_report(&report, output_format(cmd.format, loaded.as_ref()))?;
            println!("{rendered}");

            if report.unscored > 0 {
                Ok(exit_code::UNSCORED)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
