//! Pool Inspection CLI
//!
//! Command-line front end for the constant-product reserve model.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use cpmm_reserves::{analytics::print_summary, config::PoolConfig, liquidity::Pool};

#[derive(Parser)]
#[command(name = "cpmm")]
#[command(version = "0.1.0")]
#[command(about = "Constant-product pool reserve model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a pool and print its state
    Inspect {
        /// Initial liquidity of token A
        #[arg(long, allow_hyphen_values = true)]
        liquidity0: Option<f64>,

        /// Initial liquidity of token B
        #[arg(long, allow_hyphen_values = true)]
        liquidity1: Option<f64>,

        /// JSON config file with initial liquidity
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print model info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    match cli.command {
        Commands::Inspect {
            liquidity0,
            liquidity1,
            config,
            json,
        } => {
            inspect(liquidity0, liquidity1, config, json)?;
        }

        Commands::Info => {
            print_info();
        }
    }

    Ok(())
}

fn inspect(
    liquidity0: Option<f64>,
    liquidity1: Option<f64>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            info!("Loading config from: {:?}", path);
            PoolConfig::load(&path)?
        }
        None => PoolConfig::default(),
    }
    .with_overrides(liquidity0, liquidity1);

    info!("Liquidity: {} / {}", config.liquidity0, config.liquidity1);

    let mut pool = Pool::from_config(&config).context("Failed to construct pool")?;
    pool.compute_invariant();

    let snapshot = pool.snapshot();
    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("Failed to serialize snapshot")?;
        println!("{}", out);
    } else {
        print_summary(&snapshot);
    }

    Ok(())
}

fn print_info() {
    println!();
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║       Constant-Product Pool Model - Info                 ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!("Tracks two token reserves and computes k = reserve_a * reserve_b.");
    println!("k is cached and only refreshed on an explicit recompute.");
    println!();
    println!("COMPONENTS:");
    println!("  • Asset  - Fixed total supply of one token");
    println!("  • Pool   - Two assets, live reserves, cached invariant");
    println!();
    println!("USAGE:");
    println!("  cpmm inspect --liquidity0 100 --liquidity1 50");
    println!("  cpmm inspect -c pool.json --json");
    println!();
}
