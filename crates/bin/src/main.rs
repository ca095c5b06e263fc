//! Hobart CLI binary.
//!
//! Analyzes an asset allocation against either the built-in long-term
//! capital market assumptions or statistics estimated from recent market
//! data, and samples the efficient frontier point cloud for plotting.

use chrono::{Duration, Utc};
use clap::{Args, Parser, Subcommand};
use hobart::universe::AssetUniverse;
use hobart_data::{CapitalMarketAssumptions, HistoricalEstimator, StatisticsProvider};
use hobart_output::{AllocationSummary, ExportFormat, export_frontier};
use hobart_risk::{
    DEFAULT_GRID_RESOLUTION, FrontierPoint, StatisticsSnapshot, compute_metrics, sample_frontier,
};
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::Array1;
use serde_json::json;
use std::path::PathBuf;
use std::process;
use std::time::Duration as StdDuration;

#[derive(Parser)]
#[command(name = "hobart")]
#[command(about = "Hobart: portfolio statistics and efficient frontier engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an allocation against the built-in long-term assumptions
    Analyze {
        #[command(flatten)]
        opts: AnalysisOpts,
    },

    /// Analyze an allocation against statistics estimated from recent
    /// market data
    Live {
        /// History window in years
        #[arg(long, default_value = "1")]
        years: u32,

        #[command(flatten)]
        opts: AnalysisOpts,
    },
}

#[derive(Args)]
struct AnalysisOpts {
    /// Comma-separated asset weights (default: equal weighting)
    #[arg(long, value_delimiter = ',')]
    weights: Option<Vec<f64>>,

    /// Annualized risk-free rate
    #[arg(long, default_value = "0.02")]
    risk_free_rate: f64,

    /// Frontier grid resolution
    #[arg(long, default_value_t = DEFAULT_GRID_RESOLUTION)]
    resolution: usize,

    /// Target annualized return to check the allocation against
    #[arg(long)]
    target_return: Option<f64>,

    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    format: String,

    /// Export the frontier point cloud to this path (.csv or .json)
    #[arg(long)]
    export: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let universe = AssetUniverse::new();

    match cli.command {
        Commands::Analyze { opts } => {
            let snapshot = CapitalMarketAssumptions::new().statistics().await?;
            report(&universe, &snapshot, &opts)
        }
        Commands::Live { years, opts } => {
            let end = Utc::now();
            let start = end - Duration::days(365 * i64::from(years));
            let estimator = HistoricalEstimator::new(universe.symbols(), start, end)?;

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message(format!(
                "Fetching {} of daily price history for {} symbols...",
                if years == 1 { "1 year".to_string() } else { format!("{years} years") },
                universe.len()
            ));
            spinner.enable_steady_tick(StdDuration::from_millis(100));

            let snapshot = estimator.statistics().await;
            spinner.finish_and_clear();

            report(&universe, &snapshot?, &opts)
        }
    }
}

fn report(
    universe: &AssetUniverse,
    snapshot: &StatisticsSnapshot,
    opts: &AnalysisOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let weights = match &opts.weights {
        Some(w) => Array1::from_vec(w.clone()),
        None => Array1::from_elem(universe.len(), 1.0 / universe.len() as f64),
    };

    let metrics = compute_metrics(&weights, snapshot, opts.risk_free_rate)?;
    let frontier = sample_frontier(snapshot, opts.resolution)?;
    let summary = AllocationSummary::new(universe.labels(), weights.to_vec(), metrics);

    match opts.format.as_str() {
        "json" => print_json(&summary, &frontier, opts)?,
        _ => print_text(&summary, &frontier, opts),
    }

    if let Some(path) = &opts.export {
        let format = ExportFormat::from_path(path)?;
        export_frontier(&frontier, path, format)?;
        if opts.format != "json" {
            println!("Frontier exported to {}", path.display());
        }
    }

    Ok(())
}

fn print_text(summary: &AllocationSummary, frontier: &[FrontierPoint], opts: &AnalysisOpts) {
    println!("{}", summary.to_ascii_table());
    println!(
        "Sampled {} frontier points (resolution {})",
        frontier.len(),
        opts.resolution
    );

    if let Some(target) = opts.target_return {
        if summary.meets_target(target) {
            println!("Your portfolio meets the {:.1}% target return.", target * 100.0);
        } else {
            println!(
                "Your portfolio does not meet the {:.1}% target return.",
                target * 100.0
            );
        }
    }
}

fn print_json(
    summary: &AllocationSummary,
    frontier: &[FrontierPoint],
    opts: &AnalysisOpts,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = json!({
        "summary": summary,
        "warnings": summary.warnings(),
        "frontier": frontier,
        "meets_target": opts.target_return.map(|t| summary.meets_target(t)),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
