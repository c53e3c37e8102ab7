//! # CLI Execution Functions
//!
//! Extracted from `main.rs` to keep the entry point slim. Each subcommand
//! builds the standard registry, calls into the library, and prints a short
//! human-readable summary to stdout; report files go through `ReportWriter`.

use std::num::NonZeroUsize;

use anyhow::{bail, Context, Result};
use sieve_ladder::config::LadderConfig;
use sieve_ladder::report::{self, ReportWriter};
use sieve_ladder::{display, pattern, stats, verify, SieveRegistry, Verdict};
use tracing::info;

// ── Ladder ──────────────────────────────────────────────────────

pub fn run_list() -> Result<()> {
    let registry = SieveRegistry::standard();
    for (index, variant) in registry.iter() {
        println!("{:>2}  {:<20} {}", index, variant.name, variant.summary);
    }
    Ok(())
}

pub fn run_variant(config: &LadderConfig, index: usize, bound: usize, show: bool) -> Result<()> {
    let registry = SieveRegistry::standard();
    let primes = registry
        .run(index, bound)
        .with_context(|| format!("running sieve {} at bound {}", index, bound))?;
    let name = registry.get(index)?.name;
    println!(
        "Sieve {} ({}): {} primes below {}",
        index,
        name,
        primes.count_ones(),
        bound
    );
    if show {
        let width = NonZeroUsize::new(config.display.row_width)
            .context("display.row_width must be at least 1")?;
        for row in display::render_rows(&primes, bound, width) {
            println!("{}", row);
        }
    }
    Ok(())
}

// ── Harness ─────────────────────────────────────────────────────

pub fn run_verify(bound: usize) -> Result<()> {
    let registry = SieveRegistry::standard();
    let verdict = verify::all_variants_agree(&registry, bound)
        .with_context(|| format!("verifying sieves at bound {}", bound))?;
    match verdict {
        Verdict::Agree { variants } => {
            println!("All {} sieves agree below {}", variants, bound);
            Ok(())
        }
        Verdict::Disagree { variant, position } => {
            println!(
                "Sieve {} disagrees with sieve 1 at position {}",
                variant, position
            );
            bail!("sieves disagree at bound {}", bound)
        }
    }
}

pub fn run_time(bound: usize, trials: usize) -> Result<()> {
    let registry = SieveRegistry::standard();
    let row = stats::average_trials(&registry, bound, trials)
        .with_context(|| format!("timing sieves at bound {}", bound))?;
    for ((index, variant), avg) in registry.iter().zip(&row.averages) {
        println!(
            "Sieve {} Time:\t{:.6}s\t{}",
            index,
            avg.as_secs_f64(),
            variant.name
        );
    }
    Ok(())
}

pub fn run_stats(config: &LadderConfig) -> Result<()> {
    let registry = SieveRegistry::standard();
    let plan = config.stats_plan();
    info!(
        min_size = plan.min_size,
        max_size = plan.max_size,
        trials = plan.trials,
        "collecting statistics"
    );
    let statistics = stats::collect_statistics(&registry, &plan)?;
    let curves = stats::timing_curves(&statistics, &registry);

    let writer = ReportWriter::new(&config.data_dir);
    let max = statistics
        .rows
        .last()
        .map(|r| r.bound)
        .unwrap_or(plan.max_size);
    let stats_path = writer.write(
        &format!("Statistics_up_to_{}", max),
        &report::statistics_entries(&statistics),
    )?;
    let curves_path = writer.write(
        &format!("Functions_up_to_{}", max),
        &report::curve_entries(&curves),
    )?;
    println!("{}", stats_path.display());
    println!("{}", curves_path.display());
    Ok(())
}

// ── Patterns ────────────────────────────────────────────────────

pub fn run_gaps(config: &LadderConfig) -> Result<()> {
    let bound = config.patterns.bound;
    let patterns = pattern::unmarked_gap_patterns(bound, config.patterns.limit);
    let path = ReportWriter::new(&config.data_dir).write(
        &format!("Gap_patterns_up_to_{}", bound),
        &report::gap_entries(bound, &patterns),
    )?;
    println!("{}", path.display());
    Ok(())
}

pub fn run_offsets(config: &LadderConfig) -> Result<()> {
    let bound = config.patterns.bound;
    let patterns = pattern::composite_offset_patterns(bound);
    for p in &patterns {
        if p.offsets.is_found() {
            println!("{:>6}  period {:?}", p.prime, p.offsets.values());
        } else {
            println!(
                "{:>6}  no period in {} offsets",
                p.prime,
                p.offsets.values().len()
            );
        }
    }
    let path = ReportWriter::new(&config.data_dir).write(
        &format!("Composite_offsets_up_to_{}", bound),
        &report::offset_entries(bound, &patterns),
    )?;
    println!("{}", path.display());
    Ok(())
}
