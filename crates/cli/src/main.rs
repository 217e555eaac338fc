//! Command-line front-end: find the profit-maximizing price for a product.
//!
//! # Commands
//!
//! - `optiprice optimize --data <file> --product <name>` fits demand to the
//!   product's listings and searches the observed price range.
//! - `optiprice curve --max-demand <a> --sensitivity <b> --low <l> --high <h>`
//!   optimizes a known linear demand curve directly.
//!
//! Settings come from an optional TOML file (`--config`), overridden by flags.
//! `RUST_LOG` takes precedence over the configured log level.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod output;

use commands::{CurveArgs, OptimizeArgs};
use config::{CliConfig, LogLevel};

#[derive(Parser, Debug)]
#[command(name = "optiprice")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "OPTIPRICE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "OPTIPRICE_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate demand from market data and find the best price
    Optimize(OptimizeArgs),

    /// Find the best price for a known linear demand curve
    Curve(CurveArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }

    init_tracing(config.log_level);

    match cli.command {
        Command::Optimize(args) => commands::optimize::run(&args, &config),
        Command::Curve(args) => commands::curve::run(&args, &config),
    }
}

fn init_tracing(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
