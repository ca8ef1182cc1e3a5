// src/bin/bond_sim.rs

//! Runs one traditional-vs-tokenized simulation and prints the comparison
//! report as JSON on stdout. Logs go to stderr.

use anyhow::{Context, Result};
use bond_market_simulator::analysis::{InvestorBreakdown, SeriesDigest, breakdown_by_type};
use bond_market_simulator::{ComparisonReport, Simulation, SimulationConfig};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Bond market simulator: traditional vs tokenized venues
#[derive(Parser)]
#[command(name = "bond_sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with a (possibly partial) simulation config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of traditional bonds (each gets a tokenized twin)
    #[arg(long)]
    bonds: Option<usize>,

    #[arg(long)]
    investors: Option<usize>,

    #[arg(long)]
    days: Option<usize>,

    /// Minimum trade amount on the traditional venue
    #[arg(long)]
    trad_min: Option<f64>,

    /// Minimum trade amount on the tokenized venue
    #[arg(long)]
    token_min: Option<f64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Step the venues one after the other instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SimulationConfig::default(),
        };

        if let Some(v) = self.bonds {
            config.bond_count = v;
        }
        if let Some(v) = self.investors {
            config.investor_count = v;
        }
        if let Some(v) = self.days {
            config.day_count = v;
        }
        if let Some(v) = self.trad_min {
            config.traditional_min_amount = v;
        }
        if let Some(v) = self.token_min {
            config.tokenized_min_amount = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if self.sequential {
            config.parallel_venues = false;
        }
        Ok(config)
    }
}

#[derive(Serialize)]
struct Report {
    config: SimulationConfig,
    comparison: ComparisonReport,
    traditional_series: SeriesDigest,
    tokenized_series: SeriesDigest,
    traditional_investors: Vec<InvestorBreakdown>,
    tokenized_investors: Vec<InvestorBreakdown>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let config = cli.resolve_config()?;
    let mut simulation = Simulation::new(config.clone()).context("building simulation")?;
    let output = simulation.run().context("running simulation")?;

    let comparison =
        ComparisonReport::from_output(&output).context("simulation produced no trading days")?;
    let investors = &simulation.population().investors;
    let report = Report {
        config,
        comparison,
        traditional_series: SeriesDigest::from_metrics(&output.traditional.metrics),
        tokenized_series: SeriesDigest::from_metrics(&output.tokenized.metrics),
        traditional_investors: breakdown_by_type(&output.traditional.transactions, investors),
        tokenized_investors: breakdown_by_type(&output.tokenized.transactions, investors),
    };

    info!(
        transactions_ratio = ?report.comparison.improvement.transactions_ratio,
        volume_ratio = ?report.comparison.improvement.volume_ratio,
        "comparison ready"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
