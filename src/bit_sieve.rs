//! # BitSieve — Packed Primality Flags
//!
//! One bit per candidate integer in `[0, len)`, packed 64 to a word. A fresh
//! sieve marks every position prime except 0 and 1; a variant then clears
//! composites during its single sieving pass and hands the sieve back to the
//! caller, after which it is only read (verification, counting, display).
//!
//! Bits past `len` in the last word are kept zero so whole-word comparison and
//! `count_ones` stay exact.

use crate::error::SieveError;

const WORD_BITS: usize = 64;

#[derive(Clone, Debug)]
pub struct BitSieve {
    words: Vec<u64>,
    len: usize,
}

impl BitSieve {
    /// Allocate a sieve over `[0, len)` with every position set except 0 and 1.
    pub fn new(len: usize) -> Self {
        let num_words = len.div_ceil(WORD_BITS);
        let mut words = vec![u64::MAX; num_words];
        let tail = len % WORD_BITS;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last = (1u64 << tail) - 1;
            }
        }
        if let Some(first) = words.first_mut() {
            *first &= !0b11;
        }
        BitSieve { words, len }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get(&self, index: usize) -> Result<bool, SieveError> {
        self.check(index)?;
        Ok(self.test(index))
    }

    pub fn set(&mut self, index: usize, value: bool) -> Result<(), SieveError> {
        self.check(index)?;
        if value {
            self.words[index / WORD_BITS] |= 1u64 << (index % WORD_BITS);
        } else {
            self.clear(index);
        }
        Ok(())
    }

    /// Equality over positions. Sieves of different length are an error, not
    /// an inequality.
    pub fn compare(&self, other: &BitSieve) -> Result<bool, SieveError> {
        Ok(self.first_difference(other)?.is_none())
    }

    /// Lowest position where the two sieves disagree, if any.
    pub fn first_difference(&self, other: &BitSieve) -> Result<Option<usize>, SieveError> {
        if self.len != other.len {
            return Err(SieveError::SizeMismatch {
                left: self.len,
                right: other.len,
            });
        }
        let found = self
            .words
            .iter()
            .zip(&other.words)
            .enumerate()
            .find(|(_, (a, b))| a != b)
            .map(|(w, (a, b))| w * WORD_BITS + (a ^ b).trailing_zeros() as usize);
        Ok(found)
    }

    /// Number of positions still marked prime.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Positions still marked prime, ascending.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    pub fn primes(&self) -> Vec<usize> {
        self.iter_ones().collect()
    }

    /// Unchecked read for hot loops whose bounds already guarantee `index < len`.
    #[inline]
    pub(crate) fn test(&self, index: usize) -> bool {
        self.words[index / WORD_BITS] & (1u64 << (index % WORD_BITS)) != 0
    }

    /// Unchecked clear for hot loops whose bounds already guarantee `index < len`.
    #[inline]
    pub(crate) fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
    }

    fn check(&self, index: usize) -> Result<(), SieveError> {
        if index < self.len {
            Ok(())
        } else {
            Err(SieveError::OutOfRange {
                index,
                len: self.len,
            })
        }
    }
}

/// Iterator over set positions, one word at a time.
pub struct Ones<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
