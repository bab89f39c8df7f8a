//! Data model of the candidate space: the pair codec and the arena bit-set.
pub mod bitset;
pub mod types;

pub use bitset::{BitSet, CapacityError};
pub use types::{Pair, PairId, PairSpace};
