//! # Main — CLI Entry Point
//!
//! Routes subcommands to the ladder, the verifier, the timing harness, and the
//! pattern analyses. Handles the shared concerns: logging setup, loading the
//! optional TOML config, and applying command-line overrides on top of it.
//!
//! ## Subcommands
//!
//! `list`, `run`, `verify`, `time`, `stats`, `gaps`, `offsets`.
//!
//! ## Global Options
//!
//! - `--config`: TOML file with `[statistics]`, `[patterns]`, `[display]`.
//! - `--data-dir` / `SIEVE_LADDER_DATA_DIR`: where report files go.
//! - `LOG_FORMAT=json` switches logs to JSON; `RUST_LOG` sets the level.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use sieve_ladder::config::LadderConfig;

#[derive(Parser)]
#[command(
    name = "sieve-ladder",
    about = "Verify and benchmark a ladder of Sieve of Eratosthenes optimizations"
)]
struct Cli {
    /// TOML config file (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for report files (overrides the config file)
    #[arg(long, env = "SIEVE_LADDER_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the registered sieve variants
    List,
    /// Run one variant and report how many primes it found
    Run {
        /// Variant index (1-based, see `list`)
        #[arg(long)]
        variant: usize,
        /// Sieve the integers below this bound
        #[arg(long)]
        bound: usize,
        /// Print the sieve as rows of 1/0 glyphs
        #[arg(long)]
        show: bool,
        /// Glyphs per row when showing
        #[arg(long)]
        row_width: Option<NonZeroUsize>,
    },
    /// Check that every variant agrees with the naive sieve
    Verify {
        /// Sieve the integers below this bound
        #[arg(long)]
        bound: usize,
    },
    /// Time every variant at one bound
    Time {
        /// Sieve the integers below this bound
        #[arg(long)]
        bound: usize,
        /// Trials to average per variant (overrides `statistics.trials`)
        #[arg(long)]
        trials: Option<NonZeroUsize>,
    },
    /// Average timings over a schedule of sizes and write statistics files
    Stats {
        /// Smallest size in the schedule
        #[arg(long)]
        min_size: Option<usize>,
        /// Largest size (rounded down to a power of ten)
        #[arg(long)]
        max_size: Option<usize>,
        /// Trials per variant per size
        #[arg(long)]
        trials: Option<usize>,
    },
    /// Write the gaps between unmarked numbers as each prime is reached
    Gaps {
        /// Sieve the integers below this bound
        #[arg(long)]
        bound: Option<usize>,
        /// Number of primes to record
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write the compressed composite-offset pattern of each prime below the root
    Offsets {
        /// Sieve the integers below this bound
        #[arg(long)]
        bound: Option<usize>,
    },
}

/// Fold command-line overrides into the file (or default) configuration.
fn resolve_config(cli: &Cli) -> Result<LadderConfig> {
    let mut config = LadderConfig::load_or_default(cli.config.as_deref())?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    match &cli.command {
        Commands::Run {
            row_width: Some(w), ..
        } => config.display.row_width = w.get(),
        Commands::Stats {
            min_size,
            max_size,
            trials,
        } => {
            let s = &mut config.statistics;
            s.min_size = min_size.unwrap_or(s.min_size);
            s.max_size = max_size.unwrap_or(s.max_size);
            s.trials = trials.unwrap_or(s.trials);
        }
        Commands::Time {
            trials: Some(t), ..
        } => config.statistics.trials = t.get(),
        Commands::Gaps { bound, limit } => {
            let p = &mut config.patterns;
            p.bound = bound.unwrap_or(p.bound);
            p.limit = limit.unwrap_or(p.limit);
        }
        Commands::Offsets { bound: Some(b) } => config.patterns.bound = *b,
        _ => {}
    }
    config.validate()?;
    Ok(config)
}

fn main() -> Result<()> {
    // Structured logging: LOG_FORMAT=json for machine consumption, human-readable otherwise
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    // list and verify never read the config
    match &cli.command {
        Commands::List => return cli::run_list(),
        Commands::Verify { bound } => return cli::run_verify(*bound),
        _ => {}
    }

    let config = resolve_config(&cli)?;
    match &cli.command {
        Commands::List | Commands::Verify { .. } => unreachable!(),
        Commands::Run {
            variant,
            bound,
            show,
            ..
        } => cli::run_variant(&config, *variant, *bound, *show),
        Commands::Time { bound, .. } => cli::run_time(*bound, config.statistics.trials),
        Commands::Stats { .. } => cli::run_stats(&config),
        Commands::Gaps { .. } => cli::run_gaps(&config),
        Commands::Offsets { .. } => cli::run_offsets(&config),
    }
}
