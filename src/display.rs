//! Fixed-width text rendering of a sieve for eyeballing small bounds.

use std::num::NonZeroUsize;

use crate::bit_sieve::BitSieve;

pub const PRIME_GLYPH: char = '1';
pub const COMPOSITE_GLYPH: char = '0';

/// Rows of glyphs for positions `1..=upto`, `row_width` per row.
///
/// `upto` is clamped to the last position in the sieve. Row `r` covers
/// positions `r·w + 1 ..= r·w + w`, so with width 10 each row ends on a
/// multiple of ten.
pub fn render_rows(sieve: &BitSieve, upto: usize, row_width: NonZeroUsize) -> Vec<String> {
    let last = upto.min(sieve.len().saturating_sub(1));
    let width = row_width.get();
    (1..=last)
        .step_by(width)
        .map(|start| {
            (start..=(start + width - 1).min(last))
                .map(|i| {
                    if sieve.test(i) {
                        PRIME_GLYPH
                    } else {
                        COMPOSITE_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}
