//! bitset.rs
//! Arena bit-set over a dense index range, allocated once and never resized.

use thiserror::Error;

const WORD_BITS: u64 = 64;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot allocate a bit-set of {bits} bits")]
pub struct CapacityError {
    pub bits: u128,
}

/// Fixed-capacity set of `u64` indices in `[0, len)`.
///
/// Reads take `&self` and writes take `&mut self`, so any number of threads may
/// probe the set while nobody holds it mutably.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    len: u128,
    count: u64,
}

impl BitSet {
    pub fn with_len(len: u128) -> Result<Self, CapacityError> {
        let word_count = len.div_ceil(WORD_BITS as u128);
        let word_count = usize::try_from(word_count).map_err(|_| CapacityError { bits: len })?;

        let mut words = Vec::new();
        words
            .try_reserve_exact(word_count)
            .map_err(|_| CapacityError { bits: len })?;
        words.resize(word_count, 0);

        Ok(Self { words, len, count: 0 })
    }

    pub fn capacity(&self) -> u128 { self.len }

    pub fn is_empty(&self) -> bool { self.count == 0 }

    /// Number of indices currently in the set.
    pub fn count(&self) -> u64 { self.count }

    #[inline(always)]
    pub fn contains(&self, index: u64) -> bool {
        let word = (index / WORD_BITS) as usize;
        let mask = 1u64 << (index % WORD_BITS);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Adds `index`, returning `true` if it was not present before.
    pub fn insert(&mut self, index: u64) -> bool {
        debug_assert!((index as u128) < self.len, "bit index {} out of range", index);
        let word = &mut self.words[(index / WORD_BITS) as usize];
        let mask = 1u64 << (index % WORD_BITS);
        if *word & mask != 0 {
            return false;
        }
        *word |= mask;
        self.count += 1;
        true
    }
}
