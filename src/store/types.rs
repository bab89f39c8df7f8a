use serde::{Serialize, Deserialize};
use std::fmt;

/// Dense identifier of an ordered pair inside a [`PairSpace`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct PairId(pub u64);

impl PairId {
    #[inline(always)]
    pub fn raw(&self) -> u64 { self.0 }
}

/// An ordered pair of positive integers, the unit of the puzzle's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    pub a: u64,
    pub b: u64,
}

impl Pair {
    pub fn new(a: u64, b: u64) -> Self { Self { a, b } }
    pub fn sum(&self) -> u64 { self.a + self.b }
    pub fn prod(&self) -> u64 { self.a * self.b }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a, self.b)
    }
}

/// Bijective codec between pairs in `[1, n]²` and identifiers in `[0, n²)`.
///
/// `id = n·(a−1) + (b−1)`. Encoding and the sum/product projections sit on the
/// probe hot path, so they are plain arithmetic with no checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairSpace {
    n: u64,
}

impl PairSpace {
    /// Caller guarantees `n >= 1`; the engine validates the bound first.
    pub fn new(n: u64) -> Self {
        debug_assert!(n >= 1);
        Self { n }
    }

    #[inline(always)]
    pub fn bound(&self) -> u64 { self.n }

    /// Number of identifiers, `n²`. Wider than `u64` because `n` may be `2³²`.
    pub fn size(&self) -> u128 {
        self.n as u128 * self.n as u128
    }

    #[inline(always)]
    pub fn id_of(&self, a: u64, b: u64) -> PairId {
        PairId(self.n * (a - 1) + (b - 1))
    }

    /// Decodes an identifier. An identifier outside `[0, n²)` is a logic
    /// defect in the caller, not a recoverable condition.
    pub fn pair_of(&self, id: PairId) -> Pair {
        assert!(
            (id.0 as u128) < self.size(),
            "pair id {} outside candidate space of bound {}",
            id.0,
            self.n
        );
        Pair { a: 1 + id.0 / self.n, b: 1 + id.0 % self.n }
    }

    #[inline(always)]
    pub fn sum_of(&self, id: PairId) -> u64 {
        (1 + id.0 / self.n) + (1 + id.0 % self.n)
    }

    #[inline(always)]
    pub fn prod_of(&self, id: PairId) -> u64 {
        (1 + id.0 / self.n) * (1 + id.0 % self.n)
    }

    pub fn pairs_of(&self, ids: &[PairId]) -> Vec<Pair> {
        ids.iter().map(|&id| self.pair_of(id)).collect()
    }
}
