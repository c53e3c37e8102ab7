//! # Error — Sieve Failure Kinds
//!
//! Every failure in the ladder is local and synchronous: an index outside a
//! sieve, a dispatch to an index nobody registered, a comparison between two
//! sieves of different length, or a wheel that could not be phase-aligned.
//! Nothing here is retried. Sieving is deterministic, so a second attempt
//! would fail the same way.

/// Errors from sieve construction, dispatch, and comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SieveError {
    /// Read or write at a position outside `[0, len)`.
    OutOfRange { index: usize, len: usize },
    /// Dispatch to a variant index that is not in the registry.
    UnknownVariant { index: usize, count: usize },
    /// Two sieves of different length were compared.
    SizeMismatch { left: usize, right: usize },
    /// A bound below 2 has no candidates to sieve.
    BoundTooSmall { bound: usize },
    /// The shared wheel phase overshot `prime - 1` while aligning.
    WheelMisaligned { prime: usize },
    /// A registered variant failed; the harness stops at the first one.
    VariantFailed {
        variant: usize,
        source: Box<SieveError>,
    },
}

impl SieveError {
    /// Attribute this error to the variant that produced it.
    pub fn in_variant(self, variant: usize) -> SieveError {
        SieveError::VariantFailed {
            variant,
            source: Box::new(self),
        }
    }
}

impl std::fmt::Display for SieveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SieveError::OutOfRange { index, len } => {
                write!(f, "index {} out of range for sieve of length {}", index, len)
            }
            SieveError::UnknownVariant { index, count } => write!(
                f,
                "sieve variant {} not found ({} variants registered)",
                index, count
            ),
            SieveError::SizeMismatch { left, right } => write!(
                f,
                "compared sieves are not the same size ({} vs {})",
                left, right
            ),
            SieveError::BoundTooSmall { bound } => {
                write!(f, "bound {} is too small to sieve (need at least 2)", bound)
            }
            SieveError::WheelMisaligned { prime } => {
                write!(f, "wheel phase could not be aligned to prime {}", prime)
            }
            SieveError::VariantFailed { variant, source } => {
                write!(f, "sieve {} failed: {}", variant, source)
            }
        }
    }
}

impl std::error::Error for SieveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SieveError::VariantFailed { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
