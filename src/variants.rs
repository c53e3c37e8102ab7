//! # Variants — The Sieve Optimization Ladder
//!
//! Nine implementations of the Sieve of Eratosthenes over `[0, bound)`. Each
//! computes the same primality flags; each rung adds one optimization to the
//! one before it, so timing them side by side shows what every step buys.
//!
//! | # | Function              | Change from the previous rung                          |
//! |---|-----------------------|--------------------------------------------------------|
//! | 1 | `naive`               | every prime clears from `2n`, outer loop to `bound`    |
//! | 2 | `bounded`             | outer loop stops once `n² ≥ bound`                     |
//! | 3 | `start_at_square`     | inner loop starts at `n²`                              |
//! | 4 | `skip_evens`          | 2 handled up front, odd multiples only (`2n` steps)    |
//! | 5 | `cached_jump`         | inner step hoisted out of the loop                     |
//! | 6 | `wheel_2_3`           | 3 handled up front, multipliers coprime to 6           |
//! | 7 | `outer_skip`          | outer loop visits odd candidates only                  |
//! | 8 | `wheel_2_3_5_7`       | 5 handled with `[4, 2]`, primes ≥ 7 with the 30-wheel  |
//! | 9 | `wheel_aligned_start` | each prime ≥ 7 starts at `n²` on the shared wheel phase |
//!
//! Complexity is O(N log log N) for every rung from 2 onward; rung 1 is
//! O(N log log N) too but pays for sieving with primes above √N.

use crate::bit_sieve::BitSieve;
use crate::error::SieveError;
use crate::wheel::{WheelAlignment, COPRIME_TO_30, COPRIME_TO_6};

/// Signature shared by every rung of the ladder.
pub type SieveFn = fn(usize) -> Result<BitSieve, SieveError>;

/// Clear `start, start + step, …` below the sieve length.
#[inline]
fn strike(sieve: &mut BitSieve, start: usize, step: usize) {
    let len = sieve.len();
    let mut m = start;
    while m < len {
        sieve.clear(m);
        m += step;
    }
}

/// Every prime clears all of its multiples from `2n`.
pub fn naive(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    let mut n = 2;
    while n < bound {
        if primes.test(n) {
            let mut m = n + n;
            while m < bound {
                primes.clear(m);
                m += n;
            }
        }
        n += 1;
    }
    Ok(primes)
}

/// No composite below `bound` has a smallest factor ≥ √bound.
pub fn bounded(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    let mut n = 2;
    while n * n < bound {
        if primes.test(n) {
            let mut m = n + n;
            while m < bound {
                primes.clear(m);
                m += n;
            }
        }
        n += 1;
    }
    Ok(primes)
}

/// Multiples below `n²` were already cleared by smaller primes.
pub fn start_at_square(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    let mut n = 2;
    while n * n < bound {
        if primes.test(n) {
            let mut m = n * n;
            while m < bound {
                primes.clear(m);
                m += n;
            }
        }
        n += 1;
    }
    Ok(primes)
}

/// Even multiples of odd primes are already gone after 2's pass.
pub fn skip_evens(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);

    let mut n = 3;
    while n * n < bound {
        if primes.test(n) {
            let mut m = n * n;
            while m < bound {
                primes.clear(m);
                m += 2 * n;
            }
        }
        n += 1;
    }
    Ok(primes)
}

pub fn cached_jump(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);

    let mut n = 3;
    while n * n < bound {
        if primes.test(n) {
            let jump = 2 * n;
            let mut m = n * n;
            while m < bound {
                primes.clear(m);
                m += jump;
            }
        }
        n += 1;
    }
    Ok(primes)
}

/// Multipliers coprime to 6 are 5, 7, 11, 13, …: steps of 2 and 4 alternate.
pub fn wheel_2_3(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);
    strike(&mut primes, 9, 6);

    let mut n = 5;
    while n * n < bound {
        if primes.test(n) {
            let mut wheel = COPRIME_TO_6.cursor_at(0);
            let mut m = n + n * wheel.advance();
            while m < bound {
                primes.clear(m);
                m += n * wheel.advance();
            }
        }
        n += 1;
    }
    Ok(primes)
}

pub fn outer_skip(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);
    strike(&mut primes, 9, 6);

    let mut n = 5;
    while n * n < bound {
        if primes.test(n) {
            let mut wheel = COPRIME_TO_6.cursor_at(0);
            let mut m = n + n * wheel.advance();
            while m < bound {
                primes.clear(m);
                m += n * wheel.advance();
            }
        }
        n += 2;
    }
    Ok(primes)
}

/// 5 clears its multipliers coprime to 6; every later prime replays the
/// 30-wheel from multiplier 7.
pub fn wheel_2_3_5_7(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);
    strike(&mut primes, 9, 6);
    clear_fives(&mut primes);

    let mut n = 7;
    while n * n < bound {
        if primes.test(n) {
            let mut wheel = COPRIME_TO_30.cursor_at(0);
            let mut m = n + n * wheel.advance();
            while m < bound {
                primes.clear(m);
                m += n * wheel.advance();
            }
        }
        n += 2;
    }
    Ok(primes)
}

/// Like [`wheel_2_3_5_7`], but each prime `n` starts clearing at `n²`. One
/// alignment is shared by all primes: it moves forward to offset `n - 1`
/// before each prime, and the inner cursor continues from that phase.
pub fn wheel_aligned_start(bound: usize) -> Result<BitSieve, SieveError> {
    let mut primes = BitSieve::new(bound);
    strike(&mut primes, 4, 2);
    strike(&mut primes, 9, 6);
    clear_fives(&mut primes);

    let mut alignment = WheelAlignment::new(COPRIME_TO_30);
    let mut n = 7;
    while n * n < bound {
        if primes.test(n) {
            let phase = alignment.align_to(n)?;
            let mut wheel = COPRIME_TO_30.cursor_at(phase + 1);
            let mut m = n + n * alignment.offset();
            while m < bound {
                primes.clear(m);
                m += n * wheel.advance();
            }
        }
        n += 2;
    }
    Ok(primes)
}

fn clear_fives(primes: &mut BitSieve) {
    let bound = primes.len();
    let n = 5;
    let mut wheel = COPRIME_TO_6.cursor_at(0);
    let mut m = n + n * wheel.advance();
    while m < bound {
        primes.clear(m);
        m += n * wheel.advance();
    }
}
