//! # Stats — Repeated Trials and Timing Curves
//!
//! Turns single timings into something worth plotting. For each bound in a
//! size schedule, every variant is timed `trials` times and the durations are
//! averaged component-wise. Transposing the per-size rows gives one
//! [`TimingCurve`] per variant: ordered `(bound, seconds)` pairs that show how
//! each rung scales.
//!
//! ## Size Schedule
//!
//! Bounds step through each decade in units of that decade, e.g. for
//! `min = 1_000` and `max = 100_000`:
//!
//! ```text
//! 1000, 2000, …, 9000, 10000, 20000, …, 90000, 100000
//! ```
//!
//! The walk starts at `min` itself and steps by the decade of the current
//! size, so `min = 1_500` gives `1500, 2500, …, 9500`. `max` is rounded down
//! to a power of ten first and is sampled exactly once.

use std::time::Duration;

use serde::Serialize;
use tracing::info;

use crate::benchmark::time_all_variants;
use crate::error::SieveError;
use crate::registry::SieveRegistry;

/// What to measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatsPlan {
    pub min_size: usize,
    pub max_size: usize,
    pub trials: usize,
}

/// Per-variant mean durations at one bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeAverages {
    pub bound: usize,
    pub averages: Vec<Duration>,
}

/// Every averaged row of a statistics run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub plan: StatsPlan,
    pub rows: Vec<SizeAverages>,
}

/// One variant's runtime as a function of bound.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimingCurve {
    pub variant: usize,
    pub name: String,
    pub points: Vec<(usize, f64)>,
}

/// Largest power of ten ≤ `n` (1 for `n == 0`).
fn decade_floor(n: usize) -> usize {
    let mut d = 1usize;
    while let Some(next) = d.checked_mul(10) {
        if next > n {
            break;
        }
        d = next;
    }
    d
}

/// Sizes from `min_size` upward in steps of the current decade, ending on
/// `max_size` rounded down to a power of ten. Empty when that rounded maximum
/// is below `min_size`.
pub fn size_schedule(min_size: usize, max_size: usize) -> Vec<usize> {
    let max = decade_floor(max_size);
    let mut sizes = Vec::new();
    if max < min_size {
        return sizes;
    }
    let mut size = min_size;
    while size < max {
        sizes.push(size);
        match size.checked_add(decade_floor(size.max(1))) {
            Some(next) => size = next,
            None => break,
        }
    }
    sizes.push(max);
    sizes
}

/// Component-wise mean of `trials` passes of [`time_all_variants`].
pub fn average_trials(
    registry: &SieveRegistry,
    bound: usize,
    trials: usize,
) -> Result<SizeAverages, SieveError> {
    let mut totals = vec![Duration::ZERO; registry.count()];
    for _ in 0..trials {
        let times = time_all_variants(registry, bound)?;
        for (total, t) in totals.iter_mut().zip(times) {
            *total += t;
        }
    }
    let divisor = trials.max(1) as u32;
    let averages = totals.into_iter().map(|t| t / divisor).collect();
    Ok(SizeAverages { bound, averages })
}

pub fn collect_statistics(
    registry: &SieveRegistry,
    plan: &StatsPlan,
) -> Result<Statistics, SieveError> {
    let schedule = size_schedule(plan.min_size, plan.max_size);
    let mut rows = Vec::with_capacity(schedule.len());
    for bound in schedule {
        let row = average_trials(registry, bound, plan.trials)?;
        let fastest_us = row
            .averages
            .iter()
            .min()
            .map(|d| u64::try_from(d.as_micros()).unwrap_or(u64::MAX));
        info!(
            bound,
            trials = plan.trials,
            fastest_us,
            "averaged sieve timings"
        );
        rows.push(row);
    }
    Ok(Statistics { plan: *plan, rows })
}

/// Transpose statistics rows into one curve per registered variant.
pub fn timing_curves(stats: &Statistics, registry: &SieveRegistry) -> Vec<TimingCurve> {
    registry
        .iter()
        .map(|(index, variant)| TimingCurve {
            variant: index,
            name: variant.name.to_string(),
            points: stats
                .rows
                .iter()
                .filter_map(|row| {
                    row.averages
                        .get(index - 1)
                        .map(|d| (row.bound, d.as_secs_f64()))
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Size Schedule ───────────────────────────────────────────────

    #[test]
    fn schedule_walks_decades_and_ends_on_max() {
        let sizes = size_schedule(1_000, 100_000);
        let mut expected: Vec<usize> = (1..10).map(|k| k * 1_000).collect();
        expected.extend((1..10).map(|k| k * 10_000));
        expected.push(100_000);
        assert_eq!(sizes, expected);
    }

    #[test]
    fn schedule_rounds_max_down_to_a_power_of_ten() {
        let sizes = size_schedule(1_000, 99_999);
        assert_eq!(sizes.first(), Some(&1_000));
        assert_eq!(sizes.last(), Some(&10_000));
        assert_eq!(sizes.len(), 10);
    }

    #[test]
    fn schedule_with_min_equal_to_max_is_a_single_size() {
        assert_eq!(size_schedule(1_000, 1_000), vec![1_000]);
    }

    #[test]
    fn schedule_skips_sizes_below_min() {
        let sizes = size_schedule(3_000, 10_000);
        assert_eq!(sizes, vec![3_000, 4_000, 5_000, 6_000, 7_000, 8_000, 9_000, 10_000]);
    }

    #[test]
    fn schedule_is_empty_when_max_is_below_min_decade() {
        assert!(size_schedule(1_000, 999).is_empty());
    }

    #[test]
    fn schedule_starts_at_min_when_it_is_not_a_power_of_ten() {
        let sizes = size_schedule(1_500, 10_000);
        let mut expected: Vec<usize> = (0..9).map(|k| 1_500 + k * 1_000).collect();
        expected.push(10_000);
        assert_eq!(sizes, expected);
    }

    #[test]
    fn schedule_never_drops_below_min() {
        // 9_999 rounds down to 1_000, below the 5_000 minimum.
        assert!(size_schedule(5_000, 9_999).is_empty());
        for size in size_schedule(2_500, 1_000_000) {
            assert!(size >= 2_500, "{} below min", size);
        }
    }

    // ── Averaging ───────────────────────────────────────────────────

    #[test]
    fn averages_have_one_entry_per_variant() {
        let registry = SieveRegistry::standard();
        let row = average_trials(&registry, 2_000, 2).unwrap();
        assert_eq!(row.bound, 2_000);
        assert_eq!(row.averages.len(), 9);
    }

    #[test]
    fn timing_curve_serializes_points_as_pairs() {
        let curve = TimingCurve {
            variant: 3,
            name: "start-at-square".to_string(),
            points: vec![(1_000, 0.5)],
        };
        assert_eq!(
            serde_json::to_string(&curve).unwrap(),
            r#"{"variant":3,"name":"start-at-square","points":[[1000,0.5]]}"#
        );
    }

    #[test]
    fn zero_trials_average_to_zero() {
        let registry = SieveRegistry::standard();
        let row = average_trials(&registry, 2_000, 0).unwrap();
        assert!(row.averages.iter().all(|d| d.is_zero()));
    }

    // ── Curves ──────────────────────────────────────────────────────

    #[test]
    fn curves_transpose_rows() {
        let registry = SieveRegistry::standard();
        let stats = Statistics {
            plan: StatsPlan {
                min_size: 1_000,
                max_size: 2_000,
                trials: 1,
            },
            rows: vec![
                SizeAverages {
                    bound: 1_000,
                    averages: (1..=9).map(Duration::from_millis).collect(),
                },
                SizeAverages {
                    bound: 2_000,
                    averages: (1..=9).map(|k| Duration::from_millis(10 * k)).collect(),
                },
            ],
        };
        let curves = timing_curves(&stats, &registry);
        assert_eq!(curves.len(), 9);
        assert_eq!(curves[0].name, "naive");
        assert_eq!(curves[0].points, vec![(1_000, 0.001), (2_000, 0.01)]);
        assert_eq!(curves[8].variant, 9);
        assert_eq!(curves[8].points, vec![(1_000, 0.009), (2_000, 0.09)]);
    }

    #[test]
    fn collect_statistics_follows_the_schedule() {
        let registry = SieveRegistry::standard();
        let plan = StatsPlan {
            min_size: 100,
            max_size: 1_000,
            trials: 1,
        };
        let stats = collect_statistics(&registry, &plan).unwrap();
        let bounds: Vec<usize> = stats.rows.iter().map(|r| r.bound).collect();
        assert_eq!(bounds, size_schedule(100, 1_000));
        assert_eq!(bounds.len(), 10);
    }
}
