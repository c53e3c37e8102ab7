//! # Verify — Cross-Variant Agreement
//!
//! Variant 1 is the reference. Every other registered variant is run at the
//! same bound, in ascending index order, and compared position by position.
//! The first disagreement ends the run. A variant that fails outright (or
//! hands back a sieve of the wrong length) is a hard stop for that bound and
//! comes back as an error naming the variant.

use tracing::{debug, info, warn};

use crate::error::SieveError;
use crate::registry::SieveRegistry;

/// Outcome of comparing every variant against the reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// All `variants` registered variants produced identical sieves.
    Agree { variants: usize },
    /// `variant` first differs from the reference at `position`.
    Disagree { variant: usize, position: usize },
}

impl Verdict {
    pub fn is_agreement(&self) -> bool {
        matches!(self, Verdict::Agree { .. })
    }

    /// The disagreeing variant index, if any.
    pub fn mismatch(&self) -> Option<usize> {
        match self {
            Verdict::Agree { .. } => None,
            Verdict::Disagree { variant, .. } => Some(*variant),
        }
    }
}

/// Check that every registered variant matches variant 1 at `bound`.
pub fn all_variants_agree(registry: &SieveRegistry, bound: usize) -> Result<Verdict, SieveError> {
    let reference = registry.run(1, bound).map_err(|e| e.in_variant(1))?;

    for (index, variant) in registry.iter().skip(1) {
        let candidate = registry
            .run(index, bound)
            .map_err(|e| e.in_variant(index))?;
        let difference = reference
            .first_difference(&candidate)
            .map_err(|e| e.in_variant(index))?;
        if let Some(position) = difference {
            warn!(
                variant = index,
                name = variant.name,
                bound,
                position,
                "sieve disagrees with reference"
            );
            return Ok(Verdict::Disagree {
                variant: index,
                position,
            });
        }
        debug!(variant = index, name = variant.name, bound, "sieve agrees");
    }

    info!(
        bound,
        variants = registry.count(),
        primes = reference.count_ones(),
        "all sieves agree"
    );
    Ok(Verdict::Agree {
        variants: registry.count(),
    })
}
