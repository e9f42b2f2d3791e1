//! FLL CLI: rank events and compute league standings from a season snapshot.
//!
//! Commands:
//! - `event`: rank one event of the season
//! - `standings`: compute league standings over every event
//! - `config`: print the default standings configuration
//!
//! Logs go to stderr (`RUST_LOG` overrides the level); reports go to stdout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use fll_core::EventId;
use fll_standings::{
    event_ranking_csv, event_ranking_report, standings_csv, standings_report, to_json,
    SeasonSnapshot, StandingsConfig, StandingsService,
};

#[derive(Parser)]
#[command(
    name = "fll",
    about = "FLL CLI: robot game and judging rankings, league standings"
)]
struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank a single event.
    Event {
        /// Path to the season snapshot JSON.
        #[arg(long)]
        snapshot: PathBuf,

        /// Event id within the snapshot.
        #[arg(long)]
        event: u32,

        /// Path to a TOML standings config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Compute league standings for the season.
    Standings {
        /// Path to the season snapshot JSON.
        #[arg(long)]
        snapshot: PathBuf,

        /// Path to a TOML standings config. Defaults apply when omitted.
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
    },
    /// Print the default configuration as TOML.
    Config,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown table.
    Table,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Event {
            snapshot,
            event,
            config,
            format,
        } => run_event(&snapshot, EventId(event), config.as_deref(), format),
        Commands::Standings {
            snapshot,
            config,
            format,
        } => run_standings(&snapshot, config.as_deref(), format),
        Commands::Config => {
            print!("{}", StandingsConfig::default().to_toml()?);
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn build_service(
    snapshot_path: &Path,
    config_path: Option<&Path>,
) -> Result<StandingsService<SeasonSnapshot>> {
    let config = match config_path {
        Some(path) => StandingsConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => StandingsConfig::default(),
    };
    let snapshot = SeasonSnapshot::from_file(snapshot_path)
        .with_context(|| format!("failed to load snapshot {}", snapshot_path.display()))?;
    debug!(
        season = %snapshot.season.id,
        teams = snapshot.teams.len(),
        events = snapshot.events.len(),
        "snapshot loaded"
    );
    Ok(StandingsService::new(snapshot, config)?)
}

fn run_event(
    snapshot_path: &Path,
    event: EventId,
    config_path: Option<&Path>,
    format: Format,
) -> Result<()> {
    let service = build_service(snapshot_path, config_path)?;
    let season = service.source().season.id;
    let report = service
        .rank_event(season, event)
        .with_context(|| format!("failed to rank {event}"))?;

    let output = match format {
        Format::Table => event_ranking_report(&report, service.config()),
        Format::Json => to_json(&report)?,
        Format::Csv => event_ranking_csv(&report, service.config())?,
    };
    print!("{output}");
    Ok(())
}

fn run_standings(snapshot_path: &Path, config_path: Option<&Path>, format: Format) -> Result<()> {
    let service = build_service(snapshot_path, config_path)?;
    let season = service.source().season.id;
    let standings = service
        .league_standings(season)
        .with_context(|| format!("failed to compute standings for {season}"))?;
    info!(
        season = %season,
        fingerprint = standings.fingerprint.as_deref().unwrap_or("-"),
        "standings ready"
    );

    let output = match format {
        Format::Table => standings_report(&standings, service.config()),
        Format::Json => to_json(&standings)?,
        Format::Csv => standings_csv(&standings, service.config())?,
    };
    print!("{output}");
    Ok(())
}
