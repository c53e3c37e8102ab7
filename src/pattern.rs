//! # Pattern — Where the Wheel Constants Come From
//!
//! Empirical analyses run alongside a plain sieve pass so the wheel constants
//! in the ladder can be regenerated rather than trusted:
//!
//! - **Unmarked gaps.** When the sieve reaches a prime `p`, the distances
//!   between the positions still marked prime (from `p` onward) are the gaps
//!   between integers coprime to every smaller prime. For 2 they are all 1,
//!   for 3 all 2, for 5 alternating 2, 4, and for 7 the 30-wheel appears.
//! - **Composite offsets.** While `p` clears its multiples, the distance (in
//!   units of `p`) from one still-marked multiple to the next is exactly the
//!   skip pattern a wheel sieve replays for `p`: `[1]` for 2, `[2]` for 3,
//!   `[4, 2]` for 5, `[6, 4, 2, 4, 2, 4, 6, 2]` for 7.
//!
//! [`compress_period`] reduces such a sequence to its shortest repeating
//! prefix. It knows nothing about primes.

use serde::Serialize;

use crate::bit_sieve::BitSieve;

/// Gaps between still-marked positions at the moment `prime` was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GapPattern {
    pub prime: usize,
    pub gaps: Vec<usize>,
}

/// Offsets (in multiples of `prime`) between the composites `prime` cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OffsetPattern {
    pub prime: usize,
    pub offsets: Periodicity<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Periodicity<T> {
    Found { period: Vec<T> },
    NotFound { sequence: Vec<T> },
}

impl<T> Periodicity<T> {
    /// The period, or the full sequence when none was found.
    pub fn values(&self) -> &[T] {
        match self {
            Periodicity::Found { period } => period,
            Periodicity::NotFound { sequence } => sequence,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Periodicity::Found { .. })
    }
}

/// Shortest `L` in `1..=len/2` with `seq[i] == seq[i + L]` for every `i`
/// that has a partner.
pub fn compress_period<T: PartialEq + Clone>(sequence: &[T]) -> Periodicity<T> {
    let len = sequence.len();
    for period in 1..=len / 2 {
        if sequence
            .iter()
            .zip(&sequence[period..])
            .all(|(a, b)| a == b)
        {
            return Periodicity::Found {
                period: sequence[..period].to_vec(),
            };
        }
    }
    Periodicity::NotFound {
        sequence: sequence.to_vec(),
    }
}

/// Distances between successive marked positions above `prime`.
fn marked_gaps(sieve: &BitSieve, prime: usize) -> Vec<usize> {
    let mut gaps = Vec::new();
    let mut last = prime;
    for n in sieve.iter_ones().skip_while(|&n| n <= prime) {
        gaps.push(n - last);
        last = n;
    }
    gaps
}

/// Naive sieve over `[0, bound)`, recording gap patterns for the first
/// `limit` primes.
pub fn unmarked_gap_patterns(bound: usize, limit: usize) -> Vec<GapPattern> {
    let mut primes = BitSieve::new(bound);
    let mut patterns = Vec::with_capacity(limit.min(bound));

    let mut n = 2;
    while n < bound {
        if primes.test(n) {
            if patterns.len() < limit {
                patterns.push(GapPattern {
                    prime: n,
                    gaps: marked_gaps(&primes, n),
                });
            }
            let mut m = n + n;
            while m < bound {
                primes.clear(m);
                m += n;
            }
        }
        n += 1;
    }
    patterns
}

/// For each prime `p` with `p² < bound`, the compressed sequence of distances
/// (in units of `p`) between the multiples `p` actually had to clear.
pub fn composite_offset_patterns(bound: usize) -> Vec<OffsetPattern> {
    let mut primes = BitSieve::new(bound);
    let mut patterns = Vec::new();

    let mut n = 2;
    while n * n < bound {
        if primes.test(n) {
            let mut offsets = Vec::new();
            let mut last = n;
            let mut m = n + n;
            while m < bound {
                if primes.test(m) {
                    offsets.push((m - last) / n);
                    last = m;
                    primes.clear(m);
                }
                m += n;
            }
            patterns.push(OffsetPattern {
                prime: n,
                offsets: compress_period(&offsets),
            });
        }
        n += 1;
    }
    patterns
}
