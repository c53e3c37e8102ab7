//! # sieve-ladder
//!
//! Nine rungs of Sieve of Eratosthenes optimizations over a shared bitset,
//! a verifier that holds every rung to the naive reference, timing and
//! statistics for comparing them, and the pattern analyses that derive the
//! wheel constants the fastest rungs depend on.
//!
//! ```
//! use sieve_ladder::{all_variants_agree, SieveRegistry};
//!
//! let registry = SieveRegistry::standard();
//! let primes = registry.run(9, 30).unwrap();
//! assert_eq!(primes.primes(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! assert!(all_variants_agree(&registry, 10_000).unwrap().is_agreement());
//! ```

pub mod benchmark;
pub mod bit_sieve;
pub mod config;
pub mod display;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod report;
pub mod stats;
pub mod variants;
pub mod verify;
pub mod wheel;

pub use benchmark::{time_all_variants, time_variant, TimingSample};
pub use bit_sieve::BitSieve;
pub use error::SieveError;
pub use pattern::{composite_offset_patterns, compress_period, unmarked_gap_patterns, Periodicity};
pub use registry::SieveRegistry;
pub use verify::{all_variants_agree, Verdict};
