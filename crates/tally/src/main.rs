use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scoring::{Season, normalize, score_season, score_tournament};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod sheets;

use config::Config;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Club tournament scoring and season standings", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file overriding the club points policy
    #[arg(long, env = "TALLY_POLICY", global = true)]
    policy: Option<PathBuf>,

    /// Fail when a team pairing names an angler without an entry
    #[arg(long, env = "TALLY_STRICT_TEAMS", global = true)]
    strict_teams: bool,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank one tournament sheet
    Rank { file: PathBuf },
    /// Aggregate every sheet in a directory into season standings
    Season {
        directory: PathBuf,

        #[arg(long)]
        year: Option<i32>,
    },
    /// Check a sheet without scoring it
    Validate { file: PathBuf },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("tally={},scoring={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load(cli.policy.as_deref(), cli.strict_teams)
        .context("Failed to load scoring configuration")?;

    match cli.command {
        Commands::Rank { file } => handle_rank(file, &config),
        Commands::Season { directory, year } => handle_season(directory, year, &config),
        Commands::Validate { file } => handle_validate(file, &config),
    }
}

fn handle_rank(file: PathBuf, config: &Config) -> Result<()> {
    tracing::info!("Loading tournament sheet from: {}", file.display());
    let sheet = sheets::load_sheet(&file)?;

    let report = score_tournament(sheet, &config.policy, config.team_mode)
        .with_context(|| format!("Failed to score {}", file.display()))?;

    print_json(&report)
}

fn handle_season(directory: PathBuf, year: Option<i32>, config: &Config) -> Result<()> {
    tracing::info!("Scanning directory for tournament sheets: {}", directory.display());
    let sheets = sheets::load_directory(&directory)?;

    let report = score_season(
        sheets,
        year.map(Season::new),
        &config.policy,
        config.team_mode,
    )
    .context("Failed to compute season standings")?;

    print_json(&report)
}

fn handle_validate(file: PathBuf, config: &Config) -> Result<()> {
    let sheet = sheets::load_sheet(&file)?;
    tracing::info!("Validating {} ({} entries)", sheet.name, sheet.entries.len());

    for row in &sheet.entries {
        let entry = normalize(row.clone().into_raw_entry(&config.policy))?;
        if !entry.is_buy_in() && !entry.is_disqualified() && entry.scored_weight().is_zero() {
            tracing::warn!("Angler '{}' weighed no fish", entry.angler());
        }
    }

    score_tournament(sheet, &config.policy, config.team_mode)
        .with_context(|| format!("Sheet {} cannot be scored", file.display()))?;

    tracing::info!("✓ Validation successful!");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}
