//! Equityboard CLI: compose dashboards and check input files.
//!
//! Commands:
//! - `render`: compose a dashboard and print its JSON description
//! - `check`: validate an input file and report what it contains
//!
//! Logs go to stderr (`RUST_LOG` filters them); stdout carries only output.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use equityboard_core::composer::compose_from_source;
use equityboard_core::config::DashboardConfig;
use equityboard_core::data::{DashboardInputs, DashboardSource, FixtureSource, SyntheticSource};
use equityboard_core::domain::RawPoint;

#[derive(Parser)]
#[command(name = "equityboard", about = "Equityboard CLI: trading dashboard composer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose a dashboard and print it as JSON.
    Render {
        /// Path to a TOML config file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Seed for the synthetic source.
        #[arg(long)]
        seed: Option<u64>,

        /// Number of synthetic points.
        #[arg(long)]
        points: Option<usize>,

        /// JSON file with points, monthly returns, trades and statistics.
        #[arg(long)]
        input: Option<PathBuf>,

        /// CSV file (time,equity,trade_delta[,drawdown]) replacing the equity points.
        #[arg(long)]
        equity_csv: Option<PathBuf>,

        /// Pretty-print the JSON.
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },
    /// Validate an input file without printing the dashboard.
    Check {
        /// JSON file with points, monthly returns, trades and statistics.
        #[arg(long)]
        input: PathBuf,

        /// CSV file (time,equity,trade_delta[,drawdown]) replacing the equity points.
        #[arg(long)]
        equity_csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "equityboard_cli=info,equityboard_core=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            config,
            seed,
            points,
            input,
            equity_csv,
            pretty,
        } => run_render(config, seed, points, input, equity_csv, pretty),
        Commands::Check { input, equity_csv } => run_check(&input, equity_csv.as_deref()),
    }
}

fn run_render(
    config_path: Option<PathBuf>,
    seed: Option<u64>,
    points: Option<usize>,
    input: Option<PathBuf>,
    equity_csv: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => DashboardConfig::default(),
    };
    let style = config.style_tokens();

    let source: Box<dyn DashboardSource> = match (input, equity_csv) {
        (None, None) => {
            let mut synthetic = config.source.clone();
            if let Some(seed) = seed {
                synthetic.seed = seed;
            }
            if let Some(points) = points {
                synthetic.points = points;
            }
            Box::new(SyntheticSource::new(synthetic))
        }
        (input, csv) => {
            let base = match &input {
                Some(path) => load_inputs(path)?,
                None => SyntheticSource::new(config.source.clone()).load()?,
            };
            let name = input
                .as_ref()
                .or(csv.as_ref())
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            Box::new(FixtureSource::named(name, with_csv_points(base, csv.as_deref())?))
        }
    };

    info!(source = source.name(), "rendering dashboard");
    let spec = compose_from_source(source.as_ref(), &style)?;

    println!("{}", spec.to_json(pretty)?);
    Ok(())
}

fn run_check(input: &Path, equity_csv: Option<&Path>) -> Result<()> {
    let inputs = with_csv_points(load_inputs(input)?, equity_csv)?;
    let counts = (
        inputs.points.len(),
        inputs.monthly_returns.len(),
        inputs.trades.len(),
    );

    let source = FixtureSource::named(input.display().to_string(), inputs);
    let spec = compose_from_source(&source, &Default::default())
        .with_context(|| format!("{} failed validation", input.display()))?;

    println!(
        "ok: {} points, {} months, {} trades, {} panels",
        counts.0,
        counts.1,
        counts.2,
        spec.panels.len()
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<DashboardConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    DashboardConfig::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn load_inputs(path: &Path) -> Result<DashboardInputs> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading inputs {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing inputs {}", path.display()))
}

fn with_csv_points(mut inputs: DashboardInputs, csv: Option<&Path>) -> Result<DashboardInputs> {
    if let Some(path) = csv {
        inputs.points = read_equity_csv(path)?;
    }
    Ok(inputs)
}

/// One CSV row. The drawdown column may be absent or left empty.
#[derive(Debug, Deserialize)]
struct EquityRow {
    time: u64,
    equity: f64,
    #[serde(default)]
    trade_delta: f64,
    #[serde(default)]
    drawdown: Option<f64>,
}

fn read_equity_csv(path: &Path) -> Result<Vec<RawPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut points = Vec::new();
    for (line, row) in reader.deserialize::<EquityRow>().enumerate() {
        let row = row.with_context(|| format!("{}: bad row {}", path.display(), line + 1))?;
        points.push(RawPoint {
            time: row.time,
            equity: row.equity,
            trade_delta: row.trade_delta,
            drawdown: row.drawdown,
        });
    }
    info!(path = %path.display(), points = points.len(), "read equity csv");
    Ok(points)
}
