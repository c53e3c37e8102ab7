//! # Registry — Index-Based Variant Dispatch
//!
//! A static, ordered table from 1-based variant index to sieve function. The
//! registry is the single source for "how many variants are there" and "run
//! variant `i` at bound `N`"; the verifier, benchmark, statistics, and CLI
//! all go through it.

use crate::bit_sieve::BitSieve;
use crate::error::SieveError;
use crate::variants::{self, SieveFn};

/// One rung of the ladder.
#[derive(Clone, Copy, Debug)]
pub struct Variant {
    pub name: &'static str,
    pub summary: &'static str,
    pub run: SieveFn,
}

/// The standard nine-rung ladder, in index order.
pub const LADDER: [Variant; 9] = [
    Variant {
        name: "naive",
        summary: "clear every multiple from 2n for every n below the bound",
        run: variants::naive,
    },
    Variant {
        name: "bounded",
        summary: "stop the outer loop once n*n reaches the bound",
        run: variants::bounded,
    },
    Variant {
        name: "start-at-square",
        summary: "start clearing each prime at n*n",
        run: variants::start_at_square,
    },
    Variant {
        name: "skip-evens",
        summary: "pre-clear evens, step odd primes by 2n",
        run: variants::skip_evens,
    },
    Variant {
        name: "cached-jump",
        summary: "hoist the 2n step out of the inner loop",
        run: variants::cached_jump,
    },
    Variant {
        name: "wheel-2-3",
        summary: "pre-clear 2 and 3, alternate 4n/2n steps",
        run: variants::wheel_2_3,
    },
    Variant {
        name: "outer-skip",
        summary: "wheel-2-3 with the outer loop on odd candidates only",
        run: variants::outer_skip,
    },
    Variant {
        name: "wheel-2-3-5-7",
        summary: "pre-clear 5 with [4,2], primes >= 7 on the 30-wheel",
        run: variants::wheel_2_3_5_7,
    },
    Variant {
        name: "wheel-aligned-start",
        summary: "30-wheel phase-aligned so each prime starts at n*n",
        run: variants::wheel_aligned_start,
    },
];

#[derive(Clone, Debug)]
pub struct SieveRegistry {
    variants: Vec<Variant>,
}

impl Default for SieveRegistry {
    fn default() -> Self {
        SieveRegistry::standard()
    }
}

impl SieveRegistry {
    pub fn standard() -> Self {
        SieveRegistry {
            variants: LADDER.to_vec(),
        }
    }

    /// Registry over an arbitrary list; index 1 is the first entry and acts as
    /// the reference for verification.
    pub fn with_variants(variants: Vec<Variant>) -> Self {
        SieveRegistry { variants }
    }

    pub fn count(&self) -> usize {
        self.variants.len()
    }

    pub fn get(&self, index: usize) -> Result<&Variant, SieveError> {
        index
            .checked_sub(1)
            .and_then(|i| self.variants.get(i))
            .ok_or(SieveError::UnknownVariant {
                index,
                count: self.count(),
            })
    }

    /// `(index, variant)` pairs in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Variant)> + '_ {
        self.variants.iter().enumerate().map(|(i, v)| (i + 1, v))
    }

    /// Run variant `index` over `[0, bound)`.
    pub fn run(&self, index: usize, bound: usize) -> Result<BitSieve, SieveError> {
        let variant = self.get(index)?;
        if bound < 2 {
            return Err(SieveError::BoundTooSmall { bound });
        }
        (variant.run)(bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_has_nine_rungs() {
        let registry = SieveRegistry::standard();
        assert_eq!(registry.count(), 9);
        let indices: Vec<usize> = registry.iter().map(|(i, _)| i).collect();
        assert_eq!(indices, (1..=9).collect::<Vec<_>>());
        assert_eq!(registry.get(1).unwrap().name, "naive");
        assert_eq!(registry.get(9).unwrap().name, "wheel-aligned-start");
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<&str> = LADDER.iter().map(|v| v.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LADDER.len());
    }

    #[test]
    fn run_dispatches_by_index() {
        let registry = SieveRegistry::standard();
        for index in 1..=registry.count() {
            let primes = registry.run(index, 30).unwrap();
            assert_eq!(primes.count_ones(), 10, "variant {}", index);
        }
    }

    #[test]
    fn unregistered_indices_are_unknown() {
        let registry = SieveRegistry::standard();
        assert_eq!(
            registry.run(10, 100).unwrap_err(),
            SieveError::UnknownVariant { index: 10, count: 9 }
        );
        assert_eq!(
            registry.run(0, 100).unwrap_err(),
            SieveError::UnknownVariant { index: 0, count: 9 }
        );
    }

    #[test]
    fn bounds_below_two_are_rejected() {
        let registry = SieveRegistry::standard();
        assert_eq!(
            registry.run(1, 1).unwrap_err(),
            SieveError::BoundTooSmall { bound: 1 }
        );
        assert!(registry.run(1, 2).is_ok());
    }

    #[test]
    fn count_follows_the_registered_list() {
        let registry = SieveRegistry::with_variants(LADDER[..3].to_vec());
        assert_eq!(registry.count(), 3);
        assert!(registry.get(4).is_err());
    }
}
