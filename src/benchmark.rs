//! # Benchmark — Wall-Clock Timing of Variants
//!
//! Times single synchronous invocations. Variants run one after another on the
//! calling thread so no measurement competes with another for cores or cache.
//! The sieve produced by each timed run is passed through
//! [`std::hint::black_box`] and then dropped, so allocation and clearing are
//! inside the measurement while nothing downstream is.

use std::hint::black_box;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::error::SieveError;
use crate::registry::SieveRegistry;

/// One elapsed-time measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingSample {
    pub variant: usize,
    pub bound: usize,
    pub trial: usize,
    pub elapsed: Duration,
}

/// Time one invocation of variant `index` at `bound`.
pub fn time_variant(
    registry: &SieveRegistry,
    index: usize,
    bound: usize,
) -> Result<Duration, SieveError> {
    let start = Instant::now();
    let primes = registry.run(index, bound)?;
    let elapsed = start.elapsed();
    drop(black_box(primes));
    debug!(
        variant = index,
        bound,
        elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
        "timed sieve"
    );
    Ok(elapsed)
}

/// One duration per registered variant, ascending by index.
pub fn time_all_variants(
    registry: &SieveRegistry,
    bound: usize,
) -> Result<Vec<Duration>, SieveError> {
    registry
        .iter()
        .map(|(index, _)| time_variant(registry, index, bound).map_err(|e| e.in_variant(index)))
        .collect()
}

/// `trials` full passes over the registry at `bound`, flattened into samples.
pub fn sample_trials(
    registry: &SieveRegistry,
    bound: usize,
    trials: usize,
) -> Result<Vec<TimingSample>, SieveError> {
    let mut samples = Vec::with_capacity(trials * registry.count());
    for trial in 0..trials {
        let times = time_all_variants(registry, bound)?;
        samples.extend(
            times
                .into_iter()
                .enumerate()
                .map(|(i, elapsed)| TimingSample {
                    variant: i + 1,
                    bound,
                    trial,
                    elapsed,
                }),
        );
    }
    Ok(samples)
}
