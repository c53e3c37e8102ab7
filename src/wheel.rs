//! # Wheel — Residue Skip Patterns
//!
//! A wheel for the primes `{2, 3}` or `{2, 3, 5}` lists the gaps between
//! consecutive integers coprime to their product. Replaying those gaps from a
//! coprime starting multiplier `k` walks exactly the multipliers that are still
//! coprime, so a sieve can clear `k·p` for those `k` alone and never touch a
//! multiple that a smaller prime already removed.
//!
//! | Pattern         | Steps                      | Period |
//! |-----------------|----------------------------|--------|
//! | `COPRIME_TO_6`  | 4, 2                       | 6      |
//! | `COPRIME_TO_30` | 6, 4, 2, 4, 2, 4, 6, 2     | 30     |
//!
//! [`WheelCursor`] is the replay state machine: the state is the phase index,
//! each step yields `steps[phase]` and moves to `(phase + 1) % len`.
//! [`WheelAlignment`] tracks a running offset against one shared wheel so that
//! successive primes can pick up the wheel at their own phase.

use crate::error::SieveError;

/// A non-empty cycle of positive multiplier increments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkipPattern {
    steps: &'static [usize],
}

/// Gaps between residues coprime to 6, starting from residue 1 → 5.
pub const COPRIME_TO_6: SkipPattern = SkipPattern::new(&[4, 2]);

/// Gaps between residues coprime to 30, starting from residue 1 → 7.
pub const COPRIME_TO_30: SkipPattern = SkipPattern::new(&[6, 4, 2, 4, 2, 4, 6, 2]);

impl SkipPattern {
    /// Panics at compile time for empty patterns or zero steps.
    pub const fn new(steps: &'static [usize]) -> Self {
        assert!(!steps.is_empty(), "skip pattern must not be empty");
        let mut i = 0;
        while i < steps.len() {
            assert!(steps[i] > 0, "skip pattern steps must be positive");
            i += 1;
        }
        SkipPattern { steps }
    }

    pub fn steps(&self) -> &'static [usize] {
        self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Sum of one full cycle.
    pub fn period(&self) -> usize {
        self.steps.iter().sum()
    }

    /// Cursor whose first step is `steps[phase]`.
    pub fn cursor_at(&self, phase: usize) -> WheelCursor {
        WheelCursor {
            steps: self.steps,
            phase: phase % self.steps.len(),
        }
    }
}

/// Replays a [`SkipPattern`] forever, wrapping at the pattern length.
#[derive(Clone, Debug)]
pub struct WheelCursor {
    steps: &'static [usize],
    phase: usize,
}

impl WheelCursor {
    pub fn phase(&self) -> usize {
        self.phase
    }

    /// Current step, then advance the phase.
    #[inline]
    pub fn advance(&mut self) -> usize {
        let step = self.steps[self.phase];
        self.phase += 1;
        if self.phase == self.steps.len() {
            self.phase = 0;
        }
        step
    }
}

impl Iterator for WheelCursor {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        Some(self.advance())
    }
}

/// Running offset against a shared wheel, starting at `steps[0]` with phase 0.
///
/// Offsets only grow, so [`align_to`](WheelAlignment::align_to) needs at most
/// one pass from the current offset up to its target and can never cycle.
#[derive(Clone, Debug)]
pub struct WheelAlignment {
    pattern: SkipPattern,
    phase: usize,
    offset: usize,
}

impl WheelAlignment {
    pub fn new(pattern: SkipPattern) -> Self {
        WheelAlignment {
            pattern,
            phase: 0,
            offset: pattern.steps[0],
        }
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Advance until the offset equals `prime - 1`, returning the phase that
    /// produced it. Overshooting means `prime` is not on this wheel.
    pub fn align_to(&mut self, prime: usize) -> Result<usize, SieveError> {
        let target = prime.saturating_sub(1);
        let len = self.pattern.len();
        while self.offset < target {
            self.phase = (self.phase + 1) % len;
            self.offset += self.pattern.steps[self.phase];
        }
        if self.offset == target {
            Ok(self.phase)
        } else {
            Err(SieveError::WheelMisaligned { prime })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(mut a: usize, mut b: usize) -> usize {
        while b != 0 {
            let t = b;
            b = a % b;
            a = t;
        }
        a
    }

    // ── Pattern Invariants ──────────────────────────────────────────

    #[test]
    fn periods_match_the_excluded_primorials() {
        assert_eq!(COPRIME_TO_6.period(), 6);
        assert_eq!(COPRIME_TO_30.period(), 30);
        assert_eq!(COPRIME_TO_6.len(), 2);
        assert_eq!(COPRIME_TO_30.len(), 8);
    }

    /// Replaying the pattern from 1 visits every integer coprime to the
    /// modulus and nothing else.
    #[test]
    fn replay_from_one_visits_exactly_the_coprimes() {
        for (pattern, modulus) in [(COPRIME_TO_6, 6), (COPRIME_TO_30, 30)] {
            let mut k = 1;
            let mut visited = vec![1];
            for step in pattern.cursor_at(0).take(3 * pattern.len()) {
                k += step;
                visited.push(k);
            }
            let limit = *visited.last().unwrap();
            let expected: Vec<usize> = (1..=limit).filter(|&k| gcd(k, modulus) == 1).collect();
            assert_eq!(visited, expected, "modulus {}", modulus);
        }
    }

    // ── Cursor ──────────────────────────────────────────────────────

    #[test]
    fn cursor_wraps_at_pattern_length() {
        let mut cursor = COPRIME_TO_30.cursor_at(6);
        assert_eq!(cursor.advance(), 6);
        assert_eq!(cursor.phase(), 7);
        assert_eq!(cursor.advance(), 2);
        assert_eq!(cursor.phase(), 0);
        assert_eq!(cursor.advance(), 6);
    }

    #[test]
    fn cursor_at_reduces_phase_modulo_length() {
        let cursor = COPRIME_TO_6.cursor_at(5);
        assert_eq!(cursor.phase(), 1);
        let steps: Vec<usize> = cursor.take(4).collect();
        assert_eq!(steps, vec![2, 4, 2, 4]);
    }

    // ── Alignment ───────────────────────────────────────────────────

    #[test]
    fn alignment_reaches_successive_primes() {
        let mut wheel = WheelAlignment::new(COPRIME_TO_30);
        assert_eq!(wheel.offset(), 6);
        assert_eq!(wheel.align_to(7), Ok(0));
        assert_eq!(wheel.align_to(11), Ok(1));
        assert_eq!(wheel.offset(), 10);
        assert_eq!(wheel.align_to(13), Ok(2));
        assert_eq!(wheel.align_to(31), Ok(7));
        assert_eq!(wheel.align_to(37), Ok(0));
        assert_eq!(wheel.offset(), 36);
    }

    #[test]
    fn alignment_is_idempotent_for_the_same_prime() {
        let mut wheel = WheelAlignment::new(COPRIME_TO_30);
        assert_eq!(wheel.align_to(23), Ok(5));
        assert_eq!(wheel.align_to(23), Ok(5));
    }

    #[test]
    fn alignment_fails_instead_of_looping_off_the_wheel() {
        let mut wheel = WheelAlignment::new(COPRIME_TO_30);
        // 25 - 1 = 24 lies between offsets 22 and 28.
        assert_eq!(
            wheel.align_to(25),
            Err(SieveError::WheelMisaligned { prime: 25 })
        );
        assert_eq!(wheel.offset(), 28);
    }
}
