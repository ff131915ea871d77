//! Sentinel CLI — snapshot loading, sample data, and signal reports.
//!
//! Commands:
//! - `status` — load a CSV snapshot, evaluate, print the traffic light
//! - `backtest` — full governance history with transitions and day counts
//! - `sample` — write a seeded synthetic CSV set for demo runs

mod data_loader;
mod report;
mod sample_data;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use sentinel_core::config::SignalConfig;
use sentinel_core::engine::{SignalEngine, SignalEngineResult};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sentinel", about = "Sentinel CLI — market risk-signal engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the latest signals from a CSV snapshot directory.
    Status {
        /// Directory holding one `<ticker>.csv` per configured symbol.
        #[arg(long, default_value = "data")]
        data: PathBuf,

        /// TOML config file; defaults apply for any omitted field.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Benchmark override; repeat to evaluate several in parallel.
        #[arg(long = "benchmark")]
        benchmarks: Vec<String>,
    },
    /// Run the governance classifier over the full history.
    Backtest {
        /// Directory holding one `<ticker>.csv` per configured symbol.
        #[arg(long, default_value = "data")]
        data: PathBuf,

        /// TOML config file; defaults apply for any omitted field.
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write a synthetic sample CSV set.
    Sample {
        /// Output directory.
        #[arg(long, default_value = "data")]
        out: PathBuf,

        /// Number of trading days to generate.
        #[arg(long, default_value_t = 1260)]
        days: usize,

        /// RNG seed (same seed, same files).
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Status {
            data,
            config,
            benchmarks,
        } => run_status(&data, config.as_deref(), benchmarks),
        Commands::Backtest { data, config } => run_backtest(&data, config.as_deref()),
        Commands::Sample { out, days, seed } => run_sample(&out, days, seed),
    }
}

fn load_config(path: Option<&Path>) -> Result<SignalConfig> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SignalConfig::from_toml_str(&text)
                .with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(SignalConfig::default()),
    }
}

fn run_status(data: &Path, config_path: Option<&Path>, benchmarks: Vec<String>) -> Result<()> {
    let base_config = load_config(config_path)?;

    // One engine per benchmark; evaluations are independent and run in
    // parallel.
    let benchmarks = if benchmarks.is_empty() {
        vec![base_config.symbols.benchmark.clone()]
    } else {
        benchmarks
    };

    let configs: Vec<SignalConfig> = benchmarks
        .iter()
        .map(|benchmark| {
            let mut config = base_config.clone();
            config.symbols.benchmark = benchmark.clone();
            config
        })
        .collect();

    let mut snapshot = data_loader::load_snapshot(data, &base_config.symbols)?;
    // benchmark overrides may need extra files beyond the base symbol set
    for benchmark in &benchmarks {
        if snapshot.get(benchmark).is_none() {
            let path = data.join(format!("{benchmark}.csv"));
            if path.exists() {
                snapshot.insert(benchmark.clone(), data_loader::load_series(&path)?);
            }
        }
    }

    let results: Vec<Result<SignalEngineResult>> = configs
        .par_iter()
        .map(|config| -> Result<SignalEngineResult> {
            let engine = SignalEngine::new(config.clone())?;
            Ok(engine.evaluate(&snapshot)?)
        })
        .collect();

    let mut failed = false;
    for (benchmark, outcome) in benchmarks.iter().zip(results) {
        match outcome {
            Ok(result) => report::print_status(benchmark, &result),
            Err(err) => {
                eprintln!("error for {benchmark}: {err:#}");
                failed = true;
            }
        }
        println!();
    }
    if failed {
        std::process::exit(1);
    }
    Ok(())
}

fn run_backtest(data: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let snapshot = data_loader::load_snapshot(data, &config.symbols)?;
    let engine = SignalEngine::new(config)?;
    let result = engine.backtest(&snapshot)?;

    let history = result.history.as_deref().unwrap_or_default();
    report::print_backtest(history);
    println!("config: {}", &result.config_id[..16]);
    Ok(())
}

fn run_sample(out: &Path, days: usize, seed: u64) -> Result<()> {
    let symbols = SignalConfig::default().symbols;
    sample_data::write_sample_data(out, days, seed, &symbols)?;
    println!("wrote sample data for {} symbols to {}", symbols.all().len(), out.display());
    Ok(())
}
